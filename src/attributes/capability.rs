//! Narrow capability traits over attribute values.
//!
//! The action builder only ever asks "does this attribute provide X?". Each
//! question is one trait here, implemented by the attribute structs that can
//! answer it, and one accessor on [`Attribute`] that performs the dispatch.
//! An attribute may expose several capabilities (`ApiExplorerSettings` is
//! both a visibility and a group provider).

use super::types::{
    ActionNameAttribute, ApiExplorerSettingsAttribute, Attribute, BinderAttribute, BindingSource,
    ConstraintAttribute, FilterAttribute, HttpMethodAttribute, RouteAttribute,
};

/// Describes an attribute route: template, ordering hint and route name.
pub trait RouteTemplateProvider {
    fn template(&self) -> Option<&str>;
    fn order(&self) -> Option<i32>;
    fn route_name(&self) -> Option<&str>;

    /// A silent provider sets none of template, order or name. It marks the
    /// method as route-aware without defining a route of its own.
    fn is_silent(&self) -> bool {
        self.template().is_none() && self.order().is_none() && self.route_name().is_none()
    }
}

/// Declares the HTTP verbs an action accepts.
pub trait HttpMethodProvider {
    /// `None` means "no opinion" and contributes no verbs.
    fn http_methods(&self) -> Option<&[String]>;
}

pub trait ApiVisibilityProvider {
    fn ignore_api(&self) -> bool;
}

pub trait ApiGroupProvider {
    fn group_name(&self) -> Option<&str>;
}

/// Describes how a parameter is bound from the request.
pub trait BinderMetadata {
    fn binding_source(&self) -> BindingSource;
    fn binder_name(&self) -> Option<&str>;
}

impl RouteTemplateProvider for RouteAttribute {
    fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn route_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RouteTemplateProvider for HttpMethodAttribute {
    fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn route_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl HttpMethodProvider for HttpMethodAttribute {
    fn http_methods(&self) -> Option<&[String]> {
        self.verbs.as_deref()
    }
}

impl ApiVisibilityProvider for ApiExplorerSettingsAttribute {
    fn ignore_api(&self) -> bool {
        self.ignore_api
    }
}

impl ApiGroupProvider for ApiExplorerSettingsAttribute {
    fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }
}

impl BinderMetadata for BinderAttribute {
    fn binding_source(&self) -> BindingSource {
        self.source
    }

    fn binder_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Attribute {
    /// Route-template capability.
    ///
    /// An HTTP-method attribute only routes when it carries a template, order
    /// or name; a bare `[HttpGet]` is a verb constraint and nothing more.
    #[must_use]
    pub fn as_route_template_provider(&self) -> Option<&dyn RouteTemplateProvider> {
        match self {
            Attribute::Route(route) => Some(route),
            Attribute::HttpMethod(method) if method.carries_route() => Some(method),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_http_method_provider(&self) -> Option<&dyn HttpMethodProvider> {
        match self {
            Attribute::HttpMethod(method) => Some(method),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_api_visibility_provider(&self) -> Option<&dyn ApiVisibilityProvider> {
        match self {
            Attribute::ApiExplorerSettings(settings) => Some(settings),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_api_group_provider(&self) -> Option<&dyn ApiGroupProvider> {
        match self {
            Attribute::ApiExplorerSettings(settings) => Some(settings),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_binder_metadata(&self) -> Option<&dyn BinderMetadata> {
        match self {
            Attribute::Binder(binder) => Some(binder),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_action_constraint(&self) -> Option<&ConstraintAttribute> {
        match self {
            Attribute::Constraint(constraint) => Some(constraint),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_filter(&self) -> Option<&FilterAttribute> {
        match self {
            Attribute::Filter(filter) => Some(filter),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_action_name(&self) -> Option<&ActionNameAttribute> {
        match self {
            Attribute::ActionName(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_non_action(&self) -> bool {
        matches!(self, Attribute::NonAction)
    }
}
