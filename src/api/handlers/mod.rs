//! HTTP request handlers for API endpoints.
//!
//! The top-level modules serve the v2 HATEOAS surface. [`v1`] keeps the
//! plain JSON surface with its legacy bodies.

pub mod health;
pub mod usuarios;
pub mod v1;
pub mod ventas;

pub use health::health_handler;
