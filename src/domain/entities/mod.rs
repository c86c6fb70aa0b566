//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Usuario`] - A registered user
//! - [`Venta`] - A sale, referencing a user by id only
//!
//! # Design Pattern
//!
//! Each persisted entity has a companion struct without the id:
//! - `NewUsuario`, `NewVenta` - For inserts and full-record overwrites

pub mod usuario;
pub mod venta;

pub use usuario::{NewUsuario, Usuario};
pub use venta::{NewVenta, Venta};
