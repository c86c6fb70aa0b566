//! Business logic services for the application layer.

pub mod usuario_service;
pub mod venta_service;

pub use usuario_service::UsuarioService;
pub use venta_service::VentaService;
