//! User management service.

use crate::domain::entities::{NewUsuario, Usuario};
use crate::domain::repositories::UsuarioRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Message returned when a `rut` or `correo` is already taken.
pub const USUARIO_CONFLICT_MESSAGE: &str = "El correo o RUT ya está registrado";

/// Message returned when a user id does not exist.
pub const USUARIO_NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";

/// Service for managing users.
///
/// A thin layer over [`UsuarioRepository`]: it adds the "get or fail" lookup
/// used by write paths and gives unique violations a client-facing message.
pub struct UsuarioService {
    repository: Arc<dyn UsuarioRepository>,
}

impl UsuarioService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    /// Lists every user in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all(&self) -> Result<Vec<Usuario>, AppError> {
        self.repository.find_all().await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Usuario>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Looks up a user by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id_or_fail(&self, id: i32) -> Result<Usuario, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USUARIO_NOT_FOUND_MESSAGE, json!({ "id": id })))
    }

    /// Inserts a user when `id` is `None`, otherwise overwrites the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `rut` or `correo` is already registered.
    /// Returns [`AppError::NotFound`] if `id` is given but absent.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn save(&self, id: Option<i32>, data: NewUsuario) -> Result<Usuario, AppError> {
        let result = match id {
            None => self.repository.insert(data).await,
            Some(id) => self.repository.update(id, data).await.and_then(|updated| {
                updated.ok_or_else(|| {
                    AppError::not_found(USUARIO_NOT_FOUND_MESSAGE, json!({ "id": id }))
                })
            }),
        };

        match result {
            Ok(usuario) => {
                tracing::info!(id_usuario = usuario.id, "Usuario saved");
                Ok(usuario)
            }
            Err(e @ AppError::Conflict { .. }) => {
                tracing::warn!(constraint = ?e.constraint(), "Usuario rejected by unique constraint");
                Err(e.with_message(USUARIO_CONFLICT_MESSAGE))
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes a user.
    ///
    /// Deleting an absent id is not an error at this layer; callers that need
    /// a 404 check with [`Self::get_by_id_or_fail`] first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(id_usuario = id, "Usuario deleted");
        } else {
            tracing::debug!(id_usuario = id, "Delete of absent usuario ignored");
        }
        Ok(())
    }

    /// Counts stored users.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUsuarioRepository;

    fn create_test_usuario(id: i32, correo: &str) -> Usuario {
        Usuario::new(
            id,
            "12345678-9".to_string(),
            "Héctor".to_string(),
            "Robledo".to_string(),
            correo.to_string(),
        )
    }

    fn new_usuario(correo: &str) -> NewUsuario {
        create_test_usuario(0, correo).into()
    }

    fn service(mock_repo: MockUsuarioRepository) -> UsuarioService {
        UsuarioService::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_find_all() {
        let mut mock_repo = MockUsuarioRepository::new();

        let usuarios = vec![
            create_test_usuario(1, "hector@mail.com"),
            create_test_usuario(2, "laura@mail.com"),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(usuarios.clone()));

        let result = service(mock_repo).find_all().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].correo, "laura@mail.com");
    }

    #[tokio::test]
    async fn test_get_by_id_or_fail_not_found() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 99)
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).get_by_id_or_fail(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_without_id_inserts() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|data| Ok(Usuario::from_data(1, data)));
        mock_repo.expect_update().never();

        let result = service(mock_repo)
            .save(None, new_usuario("ana@mail.com"))
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.correo, "ana@mail.com");
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo.expect_insert().never();
        mock_repo
            .expect_update()
            .withf(|id, data| *id == 4 && data.correo == "nuevo@mail.com")
            .times(1)
            .returning(|id, data| Ok(Some(Usuario::from_data(id, data))));

        let result = service(mock_repo)
            .save(Some(4), new_usuario("nuevo@mail.com"))
            .await
            .unwrap();

        assert_eq!(result.id, 4);
    }

    #[tokio::test]
    async fn test_save_with_absent_id_is_not_found() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let result = service(mock_repo)
            .save(Some(42), new_usuario("x@mail.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_conflict_gets_domain_message() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "usuario_correo_key" }),
            ))
        });

        let err = service(mock_repo)
            .save(None, new_usuario("hector@mail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.message(), USUARIO_CONFLICT_MESSAGE);
        assert_eq!(err.constraint(), Some("usuario_correo_key"));
    }

    #[tokio::test]
    async fn test_delete_absent_is_silent() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|_| Ok(false));

        assert!(service(mock_repo).delete(10).await.is_ok());
    }
}
