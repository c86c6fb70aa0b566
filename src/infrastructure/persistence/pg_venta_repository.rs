//! PostgreSQL implementation of sale repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVenta, Venta};
use crate::domain::repositories::VentaRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct VentaRow {
    id_venta: i32,
    id_usuario: i32,
    nro_boleta: i32,
    fecha_compra: String,
    producto: String,
    cantidad: i32,
    total: i32,
}

impl From<VentaRow> for Venta {
    fn from(r: VentaRow) -> Self {
        Venta {
            id: r.id_venta,
            id_usuario: r.id_usuario,
            nro_boleta: r.nro_boleta,
            fecha_compra: r.fecha_compra,
            producto: r.producto,
            cantidad: r.cantidad,
            total: r.total,
        }
    }
}

const COLUMNS: &str = "id_venta, id_usuario, nro_boleta, fecha_compra, producto, cantidad, total";

/// PostgreSQL repository for sales.
///
/// `id_usuario` has an index but no foreign key: the users live behind
/// another service and are never joined.
pub struct PgVentaRepository {
    pool: Arc<PgPool>,
}

impl PgVentaRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VentaRepository for PgVentaRepository {
    async fn find_all(&self) -> Result<Vec<Venta>, AppError> {
        let rows = sqlx::query_as::<_, VentaRow>(&format!(
            "SELECT {COLUMNS} FROM venta ORDER BY id_venta"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Venta::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venta>, AppError> {
        let row = sqlx::query_as::<_, VentaRow>(&format!(
            "SELECT {COLUMNS} FROM venta WHERE id_venta = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Venta::from))
    }

    async fn find_by_id_usuario(&self, id_usuario: i32) -> Result<Vec<Venta>, AppError> {
        let rows = sqlx::query_as::<_, VentaRow>(&format!(
            "SELECT {COLUMNS} FROM venta WHERE id_usuario = $1 ORDER BY id_venta"
        ))
        .bind(id_usuario)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Venta::from).collect())
    }

    async fn insert(&self, data: NewVenta) -> Result<Venta, AppError> {
        let row = sqlx::query_as::<_, VentaRow>(&format!(
            r#"
            INSERT INTO venta (id_usuario, nro_boleta, fecha_compra, producto, cantidad, total)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(data.id_usuario)
        .bind(data.nro_boleta)
        .bind(&data.fecha_compra)
        .bind(&data.producto)
        .bind(data.cantidad)
        .bind(data.total)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, data: NewVenta) -> Result<Option<Venta>, AppError> {
        let row = sqlx::query_as::<_, VentaRow>(&format!(
            r#"
            UPDATE venta SET
                id_usuario   = $2,
                nro_boleta   = $3,
                fecha_compra = $4,
                producto     = $5,
                cantidad     = $6,
                total        = $7
            WHERE id_venta = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(data.id_usuario)
        .bind(data.nro_boleta)
        .bind(&data.fecha_compra)
        .bind(&data.producto)
        .bind(data.cantidad)
        .bind(data.total)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Venta::from))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM venta WHERE id_venta = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venta")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
