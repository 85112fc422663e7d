//! Parser for textual type expressions with support for nested generics
//!
//! This module uses nom to parse the type strings a host front end reports, e.g.:
//! - `com.example.UserDto`
//! - `retrofit2.Response<java.util.List<com.example.UserDto>>`
//! - `java.util.Map<java.lang.String, ? extends com.example.UserDto>`
//! - `kotlin.collections.List<out com.example.UserDto>` and `kotlin.Array<*>`
//!
//! - `byte[]` and `java.lang.String[][]`
//!
//! A trailing nullability marker (`UserDto?`) is accepted and dropped.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{opt, recognize, value};
use nom::multi::{many0_count, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::{IResult, Parser};

use super::type_name::TypeName;
use super::type_ref::TypeRef;
use crate::constants::PRIMITIVE_TYPES;
use crate::error::{Error, Result};

/// Parse an identifier segment (alphanumeric, `_` or `$`)
fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '$').parse(input)
}

/// Parse a dotted name such as `com.example.UserDto`
fn qualified_name(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(char('.'), identifier)).parse(input)
}

/// Parse `<A, B<C>>` into its argument list
fn type_arguments(input: &str) -> IResult<&str, Vec<TypeRef>> {
    delimited(
        pair(char('<'), multispace0),
        separated_list1(delimited(multispace0, char(','), multispace0), type_expr),
        pair(multispace0, char('>')),
    )
    .parse(input)
}

/// Kotlin star projection `*`
fn star_projection(input: &str) -> IResult<&str, TypeRef> {
    value(TypeRef::Wildcard { upper_bound: None }, char('*')).parse(input)
}

/// Java wildcard `?`, `? extends T`, `? super T`
///
/// Only `extends` contributes an upper bound.
fn java_wildcard(input: &str) -> IResult<&str, TypeRef> {
    let (input, _) = char('?').parse(input)?;
    let (input, bound) = opt(pair(
        delimited(
            multispace1,
            alt((tag("extends"), tag("super"))),
            multispace1,
        ),
        type_expr,
    ))
    .parse(input)?;

    let upper_bound = match bound {
        Some(("extends", bound)) => Some(Box::new(bound)),
        _ => None,
    };
    Ok((input, TypeRef::Wildcard { upper_bound }))
}

/// Kotlin use-site variance `out T` / `in T`
///
/// `out T` is bounded above by `T`; `in T` has no useful upper bound.
fn variance_projection(input: &str) -> IResult<&str, TypeRef> {
    let (input, (variance, bound)) = pair(
        alt((tag("out"), tag("in"))),
        preceded(multispace1, type_expr),
    )
    .parse(input)?;

    let upper_bound = (variance == "out").then(|| Box::new(bound));
    Ok((input, TypeRef::Wildcard { upper_bound }))
}

/// Count of trailing `[]` dimensions, each optionally nullable
fn array_dimensions(input: &str) -> IResult<&str, usize> {
    many0_count(terminated(
        preceded(
            multispace0,
            pair(char('['), preceded(multispace0, char(']'))),
        ),
        opt(char('?')),
    ))
    .parse(input)
}

/// Named type with optional arguments, nullability marker, and array dimensions
fn named_type(input: &str) -> IResult<&str, TypeRef> {
    let (input, name) = qualified_name(input)?;
    let (input, args) = opt(preceded(multispace0, type_arguments)).parse(input)?;
    let (input, _) = opt(char('?')).parse(input)?;
    let (input, dimensions) = array_dimensions(input)?;

    let args = args.unwrap_or_default();
    let element = if args.is_empty() && PRIMITIVE_TYPES.contains(&name) {
        TypeRef::Primitive(TypeName::from(name))
    } else {
        TypeRef::generic(name, args)
    };
    let type_ref = (0..dimensions).fold(element, |inner, _| TypeRef::Array(Box::new(inner)));
    Ok((input, type_ref))
}

fn type_expr(input: &str) -> IResult<&str, TypeRef> {
    alt((
        star_projection,
        java_wildcard,
        variance_projection,
        named_type,
    ))
    .parse(input)
}

/// Parse a complete type expression
///
/// # Errors
///
/// Returns `Error::TypeSyntax` if `input` is not a single well-formed type expression.
///
/// Type variables come back as argument-less `TypeRef::Class`; callers that know the
/// declaring scope rebind them with [`TypeRef::bind_type_parameters`].
pub fn parse_type_ref(input: &str) -> Result<TypeRef> {
    let trimmed = input.trim();
    match type_expr(trimmed) {
        Ok((remaining, type_ref)) => {
            if !remaining.trim().is_empty() {
                return Err(error_stack::Report::new(Error::type_syntax(
                    input,
                    format!("unexpected characters after type: '{remaining}'"),
                )));
            }
            Ok(type_ref)
        }
        Err(e) => Err(error_stack::Report::new(Error::type_syntax(
            input,
            format!("{e:?}"),
        ))),
    }
}
