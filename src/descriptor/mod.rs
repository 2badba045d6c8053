//! # Descriptor Module
//!
//! The metadata table the action builder reads from: controllers, their
//! methods and parameters, and the attributes attached to each of them.
//!
//! Descriptors are plain data. They can be built in code with the `with_*`
//! helpers or loaded from a YAML/JSON table with [`load_table`]:
//!
//! ```yaml
//! controllers:
//!   - name: Products
//!     methods:
//!       - name: Get
//!         attributes:
//!           - kind: http_method
//!             verbs: [GET]
//!           - kind: route
//!             template: "products/{id}"
//!         parameters:
//!           - name: id
//! ```

mod load;
mod types;

pub use load::*;
pub use types::*;
