//! Repository trait for sale data access.

use crate::domain::entities::{NewVenta, Venta};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing sales.
///
/// Mirrors [`super::UsuarioRepository`] and adds a lookup by the referenced
/// user id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVentaRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VentaRepository: Send + Sync {
    /// Returns every sale in storage order (ascending id).
    async fn find_all(&self) -> Result<Vec<Venta>, AppError>;

    /// Finds a sale by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Venta>, AppError>;

    /// Returns the sales that reference `id_usuario`, ascending by id.
    ///
    /// An unknown user id yields an empty list, not an error.
    async fn find_by_id_usuario(&self, id_usuario: i32) -> Result<Vec<Venta>, AppError>;

    /// Inserts a new sale.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `nro_boleta` is already taken.
    async fn insert(&self, data: NewVenta) -> Result<Venta, AppError>;

    /// Overwrites every field of an existing sale, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `nro_boleta` belongs to another sale.
    async fn update(&self, id: i32, data: NewVenta) -> Result<Option<Venta>, AppError>;

    /// Deletes a sale, returning whether a row was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError>;

    /// Counts stored sales.
    async fn count(&self) -> Result<i64, AppError>;
}
