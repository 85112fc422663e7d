//! Peels generic wrapper layers off a payload type
//!
//! Endpoint payloads usually arrive wrapped: a call wrapper around a response envelope
//! around a list. Each step binds the current reference's class parameters, follows one
//! argument, and stops at the first reference with nothing bound.
//!
//! Each step of a consistent host lands on a strictly shallower sub-term, so the
//! input's nesting depth bounds the number of steps. Running past it means the host's
//! substitution maps are not sub-terms of the reference.

use tracing::{debug, trace, warn};

use crate::config::AnalyzerConfig;
use crate::ports::TypeResolution;
use crate::type_model::TypeRef;

/// Resolves a parameterized reference down to its innermost concrete class
pub struct GenericSubstitutor<'a, O: ?Sized> {
    oracle: &'a O,
    config: &'a AnalyzerConfig,
}

impl<'a, O: TypeResolution + ?Sized> GenericSubstitutor<'a, O> {
    /// Substitutor over `oracle`
    pub const fn new(oracle: &'a O, config: &'a AnalyzerConfig) -> Self {
        Self { oracle, config }
    }

    /// Innermost concrete class reachable from `type_ref`
    ///
    /// Only one argument per wrapper is followed: the first, unless the wrapper has a
    /// configured index. When the followed argument is not a class (or a wildcard bounded
    /// by one) the reference at that layer is returned as is.
    pub fn innermost(&self, type_ref: &TypeRef) -> TypeRef {
        let mut current = type_ref.clone();
        let limit = type_ref.depth();

        for _ in 0..limit {
            let substitutions = self.oracle.substitution_map(&current);
            if substitutions.is_empty() {
                trace!(type_name = %current, "No substitutions - terminal type");
                return current;
            }

            let index = self.config.parameter_index_for(current.class_name());
            let next = match substitutions.get_index(index) {
                Some((_, arg @ TypeRef::Class { .. })) => arg.clone(),
                Some((
                    _,
                    TypeRef::Wildcard {
                        upper_bound: Some(bound),
                    },
                )) if bound.is_class() => (**bound).clone(),
                Some((parameter, argument)) => {
                    debug!(
                        type_name = %current,
                        parameter,
                        argument = %argument,
                        "Followed type argument is not a class - keeping wrapper"
                    );
                    return current;
                }
                None => {
                    debug!(
                        type_name = %current,
                        index,
                        "No type argument at the followed index - keeping wrapper"
                    );
                    return current;
                }
            };

            trace!(from = %current, to = %next, "Unwrapped generic layer");
            current = next;
        }

        warn!(
            type_name = %type_ref,
            limit,
            "Host substitutions exceed the reference's nesting depth"
        );
        current
    }
}
