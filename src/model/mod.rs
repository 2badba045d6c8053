//! # Model Module
//!
//! Turns method descriptors into the action model the router is built from.
//!
//! ## Pipeline
//!
//! ```text
//! MethodDescriptor
//!     │ ActionPolicy::is_action          (eligibility)
//!     ▼
//! RouteClassification::of               (non-silent vs silent route providers)
//!     │ split_route_attributes           (one attribute subset per action)
//!     ▼
//! ActionPolicy::create_action_model     (× actions)
//!     │ ActionPolicy::create_parameter_model (× parameters)
//!     ▼
//! Vec<ActionModel>
//! ```
//!
//! A method carrying several route-defining attributes becomes several
//! actions. `[Route("b")] [Route("c")]` on one method yields two actions, each
//! seeing only its own route attribute plus every non-route attribute.
//! Silent route attributes (no template, order or name) do not split the
//! method; they produce one extra action that sees all of them.

mod build;
mod eligibility;
mod policy;
mod types;


pub use build::{
    assemble_action, assemble_parameter, split_route_attributes, ActionModelBuilder,
    RouteClassification,
};
pub use eligibility::{eligibility, is_action, Ineligibility, DEFAULT_ROOT_TYPE};
pub use policy::{ActionPolicy, DefaultActionPolicy};
pub use types::*;
