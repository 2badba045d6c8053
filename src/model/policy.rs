use super::build::{assemble_action, assemble_parameter};
use super::eligibility::{self, DEFAULT_ROOT_TYPE};
use super::types::{ActionModel, ActionRef, ParameterModel};
use crate::attributes::{Attribute, BindingSource};
use crate::config::BuilderConfig;
use crate::descriptor::{MethodDescriptor, ParameterDescriptor};

/// Extension points of the action builder.
///
/// Every method has a default that implements the standard discovery rules,
/// so a policy only overrides what it needs to change. Overrides can still
/// delegate to the defaults through [`assemble_action`] and
/// [`assemble_parameter`].
///
/// ```rust
/// use brrtrouter_actions::descriptor::MethodDescriptor;
/// use brrtrouter_actions::model::{ActionModelBuilder, ActionPolicy};
///
/// /// Only methods whose name ends in `Action` are actions.
/// struct SuffixPolicy;
///
/// impl ActionPolicy for SuffixPolicy {
///     fn is_action(&self, method: &MethodDescriptor) -> bool {
///         method.name.ends_with("Action")
///     }
/// }
///
/// let builder = ActionModelBuilder::with_policy(SuffixPolicy);
/// assert!(builder.build_action_models(&MethodDescriptor::new("Home", "Index")).is_empty());
/// ```
pub trait ActionPolicy: Send + Sync {
    /// Root type used by the override rule of [`ActionPolicy::is_action`].
    fn root_type(&self) -> &str {
        DEFAULT_ROOT_TYPE
    }

    fn is_action(&self, method: &MethodDescriptor) -> bool {
        eligibility::is_action(method, self.root_type())
    }

    /// Build one action from `method` using only `attributes`.
    fn create_action_model(
        &self,
        method: &MethodDescriptor,
        ordinal: usize,
        attributes: Vec<Attribute>,
    ) -> ActionModel {
        assemble_action(self, method, ordinal, attributes)
    }

    /// Build the model of one parameter; `None` leaves it out of the action.
    fn create_parameter_model(
        &self,
        action: &ActionRef,
        parameter: &ParameterDescriptor,
        position: usize,
    ) -> Option<ParameterModel> {
        Some(assemble_parameter(action, parameter, position))
    }
}

/// Standard rules, tuned by a [`BuilderConfig`].
#[derive(Debug, Clone, Default)]
pub struct DefaultActionPolicy {
    config: BuilderConfig,
}

impl DefaultActionPolicy {
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }
}

impl ActionPolicy for DefaultActionPolicy {
    fn root_type(&self) -> &str {
        &self.config.root_type
    }

    fn create_parameter_model(
        &self,
        action: &ActionRef,
        parameter: &ParameterDescriptor,
        position: usize,
    ) -> Option<ParameterModel> {
        let model = assemble_parameter(action, parameter, position);
        let injected = model
            .binder_metadata
            .as_ref()
            .is_some_and(|binder| binder.source == BindingSource::Services);
        if injected && self.config.skip_service_parameters {
            return None;
        }
        Some(model)
    }
}
