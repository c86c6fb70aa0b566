//! Repository trait for user data access.

use crate::domain::entities::{NewUsuario, Usuario};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUsuarioRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_usuario.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Returns every user in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Usuario>, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Usuario>, AppError>;

    /// Inserts a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `rut` or `correo` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, data: NewUsuario) -> Result<Usuario, AppError>;

    /// Overwrites every field of an existing user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Usuario))` with the stored record
    /// - `Ok(None)` if no user has that id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new `rut` or `correo` belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i32, data: NewUsuario) -> Result<Option<Usuario>, AppError>;

    /// Deletes a user by id.
    ///
    /// Returns `true` if a row was removed, `false` if the id was absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
