//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`assemblers`] - Entity to HAL representation mapping
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers for v1 and v2
//! - [`hateoas`] - Links and HAL models
//! - [`middleware`] - Request processing middleware
//! - [`paths`] - Route templates
//! - [`routes`] - Route configuration and composition

pub mod assemblers;
pub mod dto;
pub mod handlers;
pub mod hateoas;
pub mod middleware;
pub mod paths;
pub mod routes;
