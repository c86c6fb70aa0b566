//! Handlers for the v1 plain JSON surface.
//!
//! v1 predates the hypermedia API and keeps its own response bodies:
//!
//! - lookups of a missing id return `{"message", "status": "404", "timestamp"}`
//! - updates and deletes of a missing id return 404 with an empty body
//! - conflicts return the legacy single-key bodies
//!
//! Validation failures and internal errors use the common [`AppError`] body.
//!
//! [`AppError`]: crate::error::AppError

pub mod usuarios;
pub mod ventas;
