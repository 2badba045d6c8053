//! # BRRTRouter Actions
//!
//! **BRRTRouter Actions** turns controller method metadata into routable
//! action models. It is the discovery stage in front of a router: it decides
//! which methods are actions, and how many actions each method becomes.
//!
//! ## Overview
//!
//! A controller method can carry several route attributes. Each route
//! attribute with a template, order or name yields its own action. Attributes
//! that do not provide a route (filters, constraints, plain verbs, API
//! settings, ...) are shared by every action split from the method.
//! Parameters are modelled per action and keep a back-reference to it.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`attributes`]** - Attribute metadata and the capabilities each kind provides
//! - **[`descriptor`]** - Controller/method/parameter descriptors and table loading
//! - **[`model`]** - Eligibility, route splitting and action/parameter assembly
//! - **[`linter`]** - Checks over a built application (ambiguous routes, bad verbs, ...)
//! - **[`config`]** - Builder configuration from TOML and environment variables
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - The `brrtrouter-actions` command-line tool
//!
//! ### Build Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Table as descriptor::load_table
//!     participant Builder as model::ActionModelBuilder
//!     participant Policy as model::ActionPolicy
//!     participant Lint as linter::lint_application
//!
//!     Table->>Builder: Vec<ControllerDescriptor>
//!     loop every method
//!         Builder->>Policy: is_action(method)
//!         Builder->>Builder: classify route attributes, split
//!         loop every split
//!             Builder->>Policy: create_action_model(method, attributes)
//!             Policy->>Policy: create_parameter_model(action, parameter)
//!         end
//!     end
//!     Builder->>Lint: ApplicationModel
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use brrtrouter_actions::attributes::Attribute;
//! use brrtrouter_actions::descriptor::MethodDescriptor;
//! use brrtrouter_actions::model::ActionModelBuilder;
//!
//! let method = MethodDescriptor::new("Products", "Bar").with_attributes([
//!     Attribute::http_method("GET"),
//!     Attribute::http_method("POST"),
//!     Attribute::route("b"),
//!     Attribute::route("c"),
//! ]);
//!
//! let actions = ActionModelBuilder::new().build_action_models(&method);
//! assert_eq!(actions.len(), 2);
//! assert_eq!(actions[0].route_template(), Some("b"));
//! assert_eq!(actions[1].route_template(), Some("c"));
//! assert_eq!(actions[1].http_methods, ["GET", "POST"]);
//! ```
//!
//! ## Metadata Tables
//!
//! The same descriptors can be loaded from YAML or JSON and inspected with
//! the bundled binary:
//!
//! ```bash
//! brrtrouter-actions inspect --table controllers.yaml
//! brrtrouter-actions lint --table controllers.yaml
//! ```
//!
//! ## Customising Discovery
//!
//! Every decision the builder makes goes through an [`model::ActionPolicy`].
//! Override only the hooks you need; the rest fall back to the default
//! behaviour. See the trait docs for an example.

pub mod attributes;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod linter;
pub mod logging;
pub mod model;

pub use config::BuilderConfig;
pub use descriptor::{load_table, ControllerDescriptor, MethodDescriptor, ParameterDescriptor};
pub use model::{
    ActionModel, ActionModelBuilder, ActionPolicy, ApplicationModel, ControllerModel,
    DefaultActionPolicy, ParameterModel,
};
