//! Flattens the field graph of a payload class
//!
//! Output order: a class's retained fields in declaration order, then the flattening of
//! each retained instance field's class type, depth-first. Classes reached on separate
//! branches are expanded each time. A class already being expanded higher up the
//! current path is not expanded again, so self-referential and mutually-referential
//! payloads terminate: `Node { next: Node }` yields `[next]`.
//!
//! Traversal uses an explicit stack, so deep payload graphs do not grow the call stack.

use tracing::{debug, trace};

use crate::ports::SymbolOracle;
use crate::type_model::{ClassDefinition, FieldRecord, TypeName, TypeRef};

/// One class being expanded: its name and the nested class types still to visit
struct Frame<'o> {
    class_name: &'o TypeName,
    nested:     std::vec::IntoIter<&'o TypeRef>,
}

/// Recursively collects declared fields across a class graph
pub struct FieldCollector<'o, O: ?Sized> {
    oracle: &'o O,
}

impl<'o, O: SymbolOracle + ?Sized> FieldCollector<'o, O> {
    /// Collector over `oracle`
    pub const fn new(oracle: &'o O) -> Self {
        Self { oracle }
    }

    /// Flattened fields of the class `type_ref` names
    ///
    /// Unresolvable classes contribute no fields. No generic substitution is applied to
    /// field types; a field typed `T` or `List<T>` is followed by its raw class, if any.
    pub fn collect(&self, type_ref: &TypeRef) -> Vec<FieldRecord> {
        let oracle = self.oracle;
        let mut records = Vec::new();

        let Some(root) = oracle.resolve_class(type_ref) else {
            debug!(type_name = %type_ref, "Type not resolvable - no fields collected");
            return records;
        };

        let mut stack = vec![self.expand(root, &mut records)];

        while let Some(frame) = stack.last_mut() {
            let Some(nested) = frame.nested.next() else {
                stack.pop();
                continue;
            };

            let Some(class) = oracle.resolve_class(nested) else {
                trace!(type_name = %nested, "Nested type not resolvable - skipped");
                continue;
            };

            if stack.iter().any(|frame| frame.class_name == &class.name) {
                debug!(
                    type_name = %class.name,
                    depth = stack.len(),
                    "Class already on the current path - not expanded again"
                );
                continue;
            }

            let frame = self.expand(class, &mut records);
            stack.push(frame);
        }

        records
    }

    /// Record `class`'s retained fields and return the frame of its nested class types
    fn expand(&self, class: &'o ClassDefinition, records: &mut Vec<FieldRecord>) -> Frame<'o> {
        let mut nested = Vec::new();

        for field in &class.fields {
            let is_static = self.oracle.is_static(field);
            if is_static && !self.oracle.is_enum_constant(field) {
                trace!(owner = %class.name, field = %field.name, "Static field skipped");
                continue;
            }

            records.push(FieldRecord::new(&class.name, field));
            if !is_static && field.type_ref.is_class() {
                nested.push(&field.type_ref);
            }
        }

        Frame {
            class_name: &class.name,
            nested:     nested.into_iter(),
        }
    }
}
