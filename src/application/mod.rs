//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and mapping storage failures to client-facing errors. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::UsuarioService`] - User CRUD
//! - [`services::VentaService`] - Sale CRUD and lookup by user
//! - [`seeder::Seeder`] - Fake test data for empty stores

pub mod seeder;
pub mod services;
