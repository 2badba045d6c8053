//! # Attributes Module
//!
//! Declarative metadata attached to controller methods and parameters.
//!
//! Instead of discovering annotations reflectively at runtime, BRRTRouter
//! actions are described by a metadata table: every method carries an ordered
//! list of [`Attribute`] values, and the action builder asks each one which
//! capabilities it provides:
//!
//! | Capability              | Provided by                                   |
//! |-------------------------|-----------------------------------------------|
//! | route template          | `Route`, `HttpMethod` with template/order/name |
//! | HTTP methods            | `HttpMethod`                                  |
//! | API visibility / group  | `ApiExplorerSettings`                         |
//! | action constraint       | `Constraint`                                  |
//! | filter                  | `Filter`                                      |
//! | binder metadata         | `Binder` (parameters)                         |
//! | non-action marker       | `NonAction`                                   |
//! | action name             | `ActionName`                                  |

mod capability;
mod types;

#[cfg(test)]
mod tests;

pub use capability::*;
pub use types::*;
