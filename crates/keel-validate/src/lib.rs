//! # Keel Assertion Primitives
//!
//! Pure validators over nullability (`Option`), booleans, and equality.
//! Each returns the validated value unchanged on success and raises an
//! unchecked-recoverable [`Fault`] on violation, using a templated
//! message when the caller names the failed argument and a fixed default
//! message otherwise.
//!
//! These are leaf building blocks: they hold no state and have no side
//! effect beyond constructing the fault they return.

use keel_fault::{Fault, FaultKind};

/// The default and templated messages raised by the validators.
pub mod message {
    pub const MUST_BE_NULL: &str = "The object must be null";
    pub const MUST_NOT_BE_NULL: &str = "The object mustn't be null";
    pub const MUST_BE_TRUE: &str = "The value must be true";
    pub const MUST_BE_FALSE: &str = "The value must be false";
    pub const MUST_BE_EQUAL: &str = "The objects must be equal";
    pub const MUST_NOT_BE_EQUAL: &str = "The objects mustn't be equal";

    pub fn must_be_null(name: &str) -> String {
        format!("{name} must be null")
    }

    pub fn must_not_be_null(name: &str) -> String {
        format!("{name} mustn't be null")
    }

    pub fn must_be_true(name: &str) -> String {
        format!("{name} must be true")
    }

    pub fn must_be_false(name: &str) -> String {
        format!("{name} must be false")
    }

    pub fn must_be_equal(primary: &str, secondary: &str) -> String {
        format!("{primary} and {secondary} must be equal")
    }

    pub fn must_not_be_equal(primary: &str, secondary: &str) -> String {
        format!("{primary} and {secondary} mustn't be equal")
    }
}

fn violation(message: String) -> Fault {
    Fault::with_message(FaultKind::UncheckedRecoverable, message)
}

/// Passes iff `value` is absent.
pub fn is_null<T>(value: Option<T>, name: Option<&str>) -> Result<(), Fault> {
    match value {
        None => Ok(()),
        Some(_) => Err(violation(match name {
            Some(name) => message::must_be_null(name),
            None => message::MUST_BE_NULL.to_owned(),
        })),
    }
}

/// Passes iff `value` is present, handing back the contained value
/// itself rather than a copy.
pub fn non_null<T>(value: Option<T>, name: Option<&str>) -> Result<T, Fault> {
    match value {
        Some(value) => Ok(value),
        None => Err(violation(match name {
            Some(name) => message::must_not_be_null(name),
            None => message::MUST_NOT_BE_NULL.to_owned(),
        })),
    }
}

/// Passes iff `value` is `true`, returning it through.
pub fn is_true(value: bool, name: Option<&str>) -> Result<bool, Fault> {
    if value {
        Ok(true)
    } else {
        Err(violation(match name {
            Some(name) => message::must_be_true(name),
            None => message::MUST_BE_TRUE.to_owned(),
        }))
    }
}

/// Passes iff `value` is `false`, returning it through.
pub fn is_false(value: bool, name: Option<&str>) -> Result<bool, Fault> {
    if !value {
        Ok(false)
    } else {
        Err(violation(match name {
            Some(name) => message::must_be_false(name),
            None => message::MUST_BE_FALSE.to_owned(),
        }))
    }
}

/// Passes iff the two values compare equal, returning `primary` through.
///
/// The templated message is used only when both names are supplied.
pub fn equal<T: PartialEq>(
    primary: T,
    secondary: &T,
    primary_name: Option<&str>,
    secondary_name: Option<&str>,
) -> Result<T, Fault> {
    if primary == *secondary {
        Ok(primary)
    } else {
        Err(violation(match (primary_name, secondary_name) {
            (Some(first), Some(second)) => message::must_be_equal(first, second),
            _ => message::MUST_BE_EQUAL.to_owned(),
        }))
    }
}

/// Passes iff the two values compare unequal, returning `primary` through.
///
/// The templated message is used only when both names are supplied.
pub fn non_equal<T: PartialEq>(
    primary: T,
    secondary: &T,
    primary_name: Option<&str>,
    secondary_name: Option<&str>,
) -> Result<T, Fault> {
    if primary != *secondary {
        Ok(primary)
    } else {
        Err(violation(match (primary_name, secondary_name) {
            (Some(first), Some(second)) => message::must_not_be_equal(first, second),
            _ => message::MUST_NOT_BE_EQUAL.to_owned(),
        }))
    }
}
