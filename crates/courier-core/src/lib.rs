//! # courier-core
//!
//! The document-node abstraction, the scalar accessor, the optional and
//! array hydrators, configuration, and error handling shared by the
//! Courier crates.

pub mod config;
pub mod error;
pub mod hydrate;
pub mod node;
pub mod scalar;

pub use error::CourierError;
pub use hydrate::{
    hydrate_array, hydrate_optional, hydrate_required, hydrate_root, optional_with, required_with,
    Hydrate,
};
pub use node::Node;
pub use scalar::{get, Scalar};
