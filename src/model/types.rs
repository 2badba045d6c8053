use crate::attributes::{
    Attribute, BinderAttribute, ConstraintAttribute, FilterAttribute, RouteTemplateProvider,
};
use crate::descriptor::MethodId;
use serde::Serialize;
use std::fmt;

/// Attribute route of an action, copied from its route-template provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeRouteModel {
    pub template: Option<String>,
    pub order: Option<i32>,
    pub name: Option<String>,
}

impl AttributeRouteModel {
    pub fn from_provider(provider: &dyn RouteTemplateProvider) -> Self {
        Self {
            template: provider.template().map(str::to_owned),
            order: provider.order(),
            name: provider.route_name().map(str::to_owned),
        }
    }
}

/// API description settings for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiExplorerModel {
    pub is_visible: bool,
    pub group_name: Option<String>,
}

impl Default for ApiExplorerModel {
    fn default() -> Self {
        Self {
            is_visible: true,
            group_name: None,
        }
    }
}

/// Non-owning reference from a parameter back to the action that owns it.
///
/// `ordinal` is the action's index among the actions split from its method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActionRef {
    pub method: MethodId,
    pub ordinal: usize,
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.method, self.ordinal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterModel {
    pub action: ActionRef,
    pub name: String,
    /// Zero-based position in the method signature
    pub position: usize,
    pub is_optional: bool,
    pub binder_metadata: Option<BinderAttribute>,
    pub attributes: Vec<Attribute>,
}

/// One routable action derived from a controller method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionModel {
    pub method: MethodId,
    pub ordinal: usize,
    pub action_name: String,
    /// De-duplicated, in declaration order
    pub http_methods: Vec<String>,
    pub attribute_route: Option<AttributeRouteModel>,
    pub action_constraints: Vec<ConstraintAttribute>,
    pub filters: Vec<FilterAttribute>,
    pub api_explorer: ApiExplorerModel,
    pub parameters: Vec<ParameterModel>,
    /// The subset of the method's attributes this action was built from
    pub attributes: Vec<Attribute>,
}

impl ActionModel {
    #[must_use]
    pub fn action_ref(&self) -> ActionRef {
        ActionRef {
            method: self.method.clone(),
            ordinal: self.ordinal,
        }
    }

    #[must_use]
    pub fn route_template(&self) -> Option<&str> {
        self.attribute_route
            .as_ref()
            .and_then(|route| route.template.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerModel {
    pub name: String,
    pub actions: Vec<ActionModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicationModel {
    pub controllers: Vec<ControllerModel>,
}

impl ApplicationModel {
    /// Every action of every controller, in declaration order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionModel> {
        self.controllers
            .iter()
            .flat_map(|controller| controller.actions.iter())
    }
}
