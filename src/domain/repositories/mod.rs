//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UsuarioRepository`] - User CRUD operations
//! - [`VentaRepository`] - Sale CRUD operations plus lookup by user id
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod usuario_repository;
pub mod venta_repository;

pub use usuario_repository::UsuarioRepository;
pub use venta_repository::VentaRepository;

#[cfg(test)]
pub use usuario_repository::MockUsuarioRepository;
#[cfg(test)]
pub use venta_repository::MockVentaRepository;
