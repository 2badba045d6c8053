use super::eligibility::eligibility;
use super::policy::{ActionPolicy, DefaultActionPolicy};
use super::types::{
    ActionModel, ActionRef, ApiExplorerModel, ApplicationModel, AttributeRouteModel,
    ControllerModel, ParameterModel,
};
use crate::attributes::{Attribute, BinderAttribute};
use crate::config::BuilderConfig;
use crate::descriptor::{ControllerDescriptor, MethodDescriptor, ParameterDescriptor};
use tracing::{debug, info};

/// Route-template providers found on a method, by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteClassification {
    /// Indices of non-silent providers; each one defines its own action
    pub splitting: Vec<usize>,
    /// At least one silent provider was present
    pub has_silent: bool,
}

impl RouteClassification {
    #[must_use]
    pub fn of(attributes: &[Attribute]) -> Self {
        let mut classification = Self::default();
        for (index, attribute) in attributes.iter().enumerate() {
            if let Some(provider) = attribute.as_route_template_provider() {
                if provider.is_silent() {
                    classification.has_silent = true;
                } else {
                    classification.splitting.push(index);
                }
            }
        }
        classification
    }

    /// No route provider of any kind.
    #[must_use]
    pub fn is_unrouted(&self) -> bool {
        self.splitting.is_empty() && !self.has_silent
    }

    /// Number of actions the method splits into.
    #[must_use]
    pub fn action_count(&self) -> usize {
        if self.is_unrouted() {
            1
        } else {
            self.splitting.len() + usize::from(self.has_silent)
        }
    }
}

/// Split a method's attributes into one subset per action.
///
/// - no route providers: one subset holding every attribute;
/// - one subset per non-silent provider, keeping that provider and every
///   attribute that is not a route provider;
/// - if any silent provider exists, a final subset holding everything except
///   the non-silent providers.
///
/// Providers are matched by position, so two equal attributes still define
/// two actions.
#[must_use]
pub fn split_route_attributes(attributes: &[Attribute]) -> Vec<Vec<Attribute>> {
    let classification = RouteClassification::of(attributes);
    if classification.is_unrouted() {
        return vec![attributes.to_vec()];
    }

    let mut subsets = Vec::with_capacity(classification.action_count());
    for &keep in &classification.splitting {
        subsets.push(
            attributes
                .iter()
                .enumerate()
                .filter(|(index, attribute)| {
                    *index == keep || attribute.as_route_template_provider().is_none()
                })
                .map(|(_, attribute)| attribute.clone())
                .collect(),
        );
    }
    if classification.has_silent {
        subsets.push(
            attributes
                .iter()
                .enumerate()
                .filter(|(index, _)| !classification.splitting.contains(index))
                .map(|(_, attribute)| attribute.clone())
                .collect(),
        );
    }
    subsets
}

/// Default action assembly, see [`ActionPolicy::create_action_model`].
///
/// Where several attributes provide the same single-valued capability, the
/// first one in `attributes` wins.
pub fn assemble_action<P: ActionPolicy + ?Sized>(
    policy: &P,
    method: &MethodDescriptor,
    ordinal: usize,
    attributes: Vec<Attribute>,
) -> ActionModel {
    let action_name = attributes
        .iter()
        .find_map(Attribute::as_action_name)
        .and_then(|attr| attr.name.clone())
        .unwrap_or_else(|| method.name.clone());

    let mut http_methods: Vec<String> = Vec::new();
    for verb in attributes
        .iter()
        .filter_map(Attribute::as_http_method_provider)
        .filter_map(|provider| provider.http_methods())
        .flatten()
    {
        if !http_methods.contains(verb) {
            http_methods.push(verb.clone());
        }
    }

    let api_explorer = ApiExplorerModel {
        is_visible: attributes
            .iter()
            .find_map(Attribute::as_api_visibility_provider)
            .is_none_or(|provider| !provider.ignore_api()),
        group_name: attributes
            .iter()
            .find_map(Attribute::as_api_group_provider)
            .and_then(|provider| provider.group_name().map(str::to_owned)),
    };

    let attribute_route = attributes
        .iter()
        .filter_map(Attribute::as_route_template_provider)
        .find(|provider| !provider.is_silent())
        .map(AttributeRouteModel::from_provider);

    let action_constraints = attributes
        .iter()
        .filter_map(Attribute::as_action_constraint)
        .cloned()
        .collect();
    let filters = attributes
        .iter()
        .filter_map(Attribute::as_filter)
        .cloned()
        .collect();

    let action = ActionRef {
        method: method.id(),
        ordinal,
    };
    let parameters = method
        .parameters
        .iter()
        .enumerate()
        .filter_map(|(position, parameter)| {
            policy.create_parameter_model(&action, parameter, position)
        })
        .collect();

    ActionModel {
        method: action.method,
        ordinal,
        action_name,
        http_methods,
        attribute_route,
        action_constraints,
        filters,
        api_explorer,
        parameters,
        attributes,
    }
}

/// Default parameter assembly, see [`ActionPolicy::create_parameter_model`].
#[must_use]
pub fn assemble_parameter(
    action: &ActionRef,
    parameter: &ParameterDescriptor,
    position: usize,
) -> ParameterModel {
    ParameterModel {
        action: action.clone(),
        name: parameter.name.clone(),
        position,
        is_optional: parameter.has_default_value,
        binder_metadata: parameter
            .attributes
            .iter()
            .find_map(Attribute::as_binder_metadata)
            .map(|binder| BinderAttribute {
                source: binder.binding_source(),
                name: binder.binder_name().map(str::to_owned),
            }),
        attributes: parameter.attributes.clone(),
    }
}

/// Builds [`ActionModel`]s from method descriptors.
///
/// The builder holds no mutable state; one instance can serve any number of
/// threads.
///
/// # Example
///
/// ```rust
/// use brrtrouter_actions::attributes::Attribute;
/// use brrtrouter_actions::descriptor::MethodDescriptor;
/// use brrtrouter_actions::model::ActionModelBuilder;
///
/// let method = MethodDescriptor::new("Products", "Foo")
///     .with_attribute(Attribute::http_method("GET"))
///     .with_attribute(Attribute::route("a"));
///
/// let actions = ActionModelBuilder::new().build_action_models(&method);
/// assert_eq!(actions.len(), 1);
/// assert_eq!(actions[0].http_methods, vec!["GET"]);
/// assert_eq!(actions[0].route_template(), Some("a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionModelBuilder<P = DefaultActionPolicy> {
    policy: P,
}

impl ActionModelBuilder<DefaultActionPolicy> {
    /// Builder with the default policy and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with the default policy tuned by `config`.
    #[must_use]
    pub fn from_config(config: BuilderConfig) -> Self {
        Self {
            policy: DefaultActionPolicy::new(config),
        }
    }
}

impl<P: ActionPolicy> ActionModelBuilder<P> {
    /// Builder driven by a custom policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// The policy this builder consults.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Whether the policy accepts `method` as an action.
    pub fn is_action(&self, method: &MethodDescriptor) -> bool {
        self.policy.is_action(method)
    }

    /// Build every action of one method.
    ///
    /// Returns an empty list for methods the policy does not accept as
    /// actions, and more than one action when the method carries several
    /// route-defining attributes.
    pub fn build_action_models(&self, method: &MethodDescriptor) -> Vec<ActionModel> {
        if !self.policy.is_action(method) {
            let reason = eligibility(method, self.policy.root_type())
                .err()
                .map_or_else(|| "rejected by policy".to_string(), |r| r.to_string());
            debug!(method = %method.id(), reason = %reason, "Skipping method: not an action");
            return Vec::new();
        }

        let subsets = split_route_attributes(&method.attributes);
        debug!(
            method = %method.id(),
            attributes = method.attributes.len(),
            actions = subsets.len(),
            "Splitting method into actions"
        );

        subsets
            .into_iter()
            .enumerate()
            .map(|(ordinal, attributes)| {
                self.policy.create_action_model(method, ordinal, attributes)
            })
            .collect()
    }

    /// Build every action of a controller, in method order.
    pub fn build_controller(&self, controller: &ControllerDescriptor) -> ControllerModel {
        let actions: Vec<ActionModel> = controller
            .methods
            .iter()
            .flat_map(|method| self.build_action_models(method))
            .collect();

        info!(
            controller = %controller.name,
            methods = controller.methods.len(),
            actions = actions.len(),
            "Controller actions built"
        );

        ControllerModel {
            name: controller.name.clone(),
            actions,
        }
    }

    /// Build one controller model per descriptor, in input order.
    pub fn build_application(&self, controllers: &[ControllerDescriptor]) -> ApplicationModel {
        ApplicationModel {
            controllers: controllers
                .iter()
                .map(|controller| self.build_controller(controller))
                .collect(),
        }
    }
}
