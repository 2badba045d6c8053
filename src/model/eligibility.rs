use crate::descriptor::{MethodDescriptor, Visibility};
use std::fmt;

/// Type at the root of every controller hierarchy. Methods whose root
/// definition lives here (`Equals`, `GetHashCode`, `ToString`, `GetType`)
/// are never actions.
pub const DEFAULT_ROOT_TYPE: &str = "object";

/// Why a method was not accepted as an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    NotPublic,
    Static,
    Abstract,
    Constructor,
    GenericDefinition,
    SpecialName,
    NonAction,
    RootTypeMember,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ineligibility::NotPublic => "not public",
            Ineligibility::Static => "static",
            Ineligibility::Abstract => "abstract",
            Ineligibility::Constructor => "constructor",
            Ineligibility::GenericDefinition => "generic method definition",
            Ineligibility::SpecialName => "special name (accessor or operator)",
            Ineligibility::NonAction => "marked non-action",
            Ineligibility::RootTypeMember => "defined by the root type",
        };
        write!(f, "{}", s)
    }
}

/// Check a method against the action rules, reporting the first rule it breaks.
///
/// # Errors
///
/// Returns the [`Ineligibility`] reason when the method is not an action.
pub fn eligibility(method: &MethodDescriptor, root_type: &str) -> Result<(), Ineligibility> {
    let modifiers = &method.modifiers;
    if method.visibility != Visibility::Public {
        return Err(Ineligibility::NotPublic);
    }
    if modifiers.is_static {
        return Err(Ineligibility::Static);
    }
    if modifiers.is_abstract {
        return Err(Ineligibility::Abstract);
    }
    if modifiers.is_constructor {
        return Err(Ineligibility::Constructor);
    }
    if modifiers.is_generic_definition {
        return Err(Ineligibility::GenericDefinition);
    }
    if modifiers.is_special_name {
        return Err(Ineligibility::SpecialName);
    }
    if method.attributes.iter().any(|a| a.is_non_action()) {
        return Err(Ineligibility::NonAction);
    }
    if method.root_declaring_type() == root_type {
        return Err(Ineligibility::RootTypeMember);
    }
    Ok(())
}

#[must_use]
pub fn is_action(method: &MethodDescriptor, root_type: &str) -> bool {
    eligibility(method, root_type).is_ok()
}
