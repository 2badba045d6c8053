use crate::attributes::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accessibility of a method as declared on its controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// Declaration modifiers relevant to action discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "constructor")]
    pub is_constructor: bool,
    /// Open generic definition (`fn get<T>()` with `T` unbound)
    #[serde(rename = "generic")]
    pub is_generic_definition: bool,
    /// Compiler-generated names: property accessors, operator overloads
    #[serde(rename = "special_name")]
    pub is_special_name: bool,
}

/// Stable identity of a method: declaring type, name and arity.
///
/// Arity disambiguates overloads with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodId {
    pub declaring_type: String,
    pub name: String,
    pub arity: usize,
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}/{}", self.declaring_type, self.name, self.arity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Whether the parameter declares a default value (and is therefore optional)
    #[serde(default)]
    pub has_default_value: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_default_value: false,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.has_default_value = true;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Filled from the owning controller when loaded from a table
    #[serde(default)]
    pub declaring_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Type that declares the root definition this method overrides, if any.
    /// `None` means the method is its own root definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_declaring_type: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl MethodDescriptor {
    /// A public, concrete instance method with no attributes or parameters.
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            visibility: Visibility::Public,
            modifiers: Modifiers::default(),
            base_declaring_type: None,
            attributes: Vec::new(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Marks this method as an override of a definition declared on `base`.
    #[must_use]
    pub fn overriding(mut self, base: impl Into<String>) -> Self {
        self.base_declaring_type = Some(base.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> MethodId {
        MethodId {
            declaring_type: self.declaring_type.clone(),
            name: self.name.clone(),
            arity: self.parameters.len(),
        }
    }

    /// The type that owns the root definition of this method.
    #[must_use]
    pub fn root_declaring_type(&self) -> &str {
        self.base_declaring_type
            .as_deref()
            .unwrap_or(&self.declaring_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Adds a method, stamping this controller as its declaring type.
    #[must_use]
    pub fn with_method(mut self, mut method: MethodDescriptor) -> Self {
        method.declaring_type = self.name.clone();
        self.methods.push(method);
        self
    }
}
