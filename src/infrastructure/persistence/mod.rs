//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUsuarioRepository`] - User storage and retrieval
//! - [`PgVentaRepository`] - Sale storage, retrieval and lookup by user id

pub mod pg_usuario_repository;
pub mod pg_venta_repository;

pub use pg_usuario_repository::PgUsuarioRepository;
pub use pg_venta_repository::PgVentaRepository;
