//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUsuario, Usuario};
use crate::domain::repositories::UsuarioRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct UsuarioRow {
    id_usuario: i32,
    rut: String,
    nombres: String,
    apellidos: String,
    correo: String,
}

impl From<UsuarioRow> for Usuario {
    fn from(r: UsuarioRow) -> Self {
        Usuario::new(r.id_usuario, r.rut, r.nombres, r.apellidos, r.correo)
    }
}

/// PostgreSQL repository for users.
///
/// Uniqueness of `rut` and `correo` is left entirely to the table constraints;
/// a violation comes back as [`AppError::Conflict`] through
/// [`crate::error::map_sqlx_error`].
pub struct PgUsuarioRepository {
    pool: Arc<PgPool>,
}

impl PgUsuarioRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn find_all(&self) -> Result<Vec<Usuario>, AppError> {
        let rows = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id_usuario, rut, nombres, apellidos, correo
            FROM usuario
            ORDER BY id_usuario
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Usuario::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Usuario>, AppError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id_usuario, rut, nombres, apellidos, correo
            FROM usuario
            WHERE id_usuario = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Usuario::from))
    }

    async fn insert(&self, data: NewUsuario) -> Result<Usuario, AppError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            INSERT INTO usuario (rut, nombres, apellidos, correo)
            VALUES ($1, $2, $3, $4)
            RETURNING id_usuario, rut, nombres, apellidos, correo
            "#,
        )
        .bind(&data.rut)
        .bind(&data.nombres)
        .bind(&data.apellidos)
        .bind(&data.correo)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, data: NewUsuario) -> Result<Option<Usuario>, AppError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            UPDATE usuario SET
                rut       = $2,
                nombres   = $3,
                apellidos = $4,
                correo    = $5
            WHERE id_usuario = $1
            RETURNING id_usuario, rut, nombres, apellidos, correo
            "#,
        )
        .bind(id)
        .bind(&data.rut)
        .bind(&data.nombres)
        .bind(&data.apellidos)
        .bind(&data.correo)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Usuario::from))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM usuario WHERE id_usuario = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuario")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
