//! Sale management service.

use crate::domain::entities::{NewVenta, Venta};
use crate::domain::repositories::VentaRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Message returned when a `nro_boleta` is already taken.
pub const VENTA_CONFLICT_MESSAGE: &str = "El N° de boleta ya está registrado";

/// Message returned when a sale id does not exist.
pub const VENTA_NOT_FOUND_MESSAGE: &str = "Venta no encontrada";

/// Service for managing sales.
///
/// The referenced `id_usuario` is stored as given. No call is made to the
/// usuario service to check it.
pub struct VentaService {
    repository: Arc<dyn VentaRepository>,
}

impl VentaService {
    /// Creates a new sale service.
    pub fn new(repository: Arc<dyn VentaRepository>) -> Self {
        Self { repository }
    }

    /// Lists every sale in storage order.
    pub async fn find_all(&self) -> Result<Vec<Venta>, AppError> {
        self.repository.find_all().await
    }

    /// Looks up a sale by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Venta>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Looks up a sale by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no sale has that id.
    pub async fn get_by_id_or_fail(&self, id: i32) -> Result<Venta, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(VENTA_NOT_FOUND_MESSAGE, json!({ "id": id })))
    }

    /// Lists the sales that reference a user id.
    pub async fn get_ventas_by_usuario_id(&self, id_usuario: i32) -> Result<Vec<Venta>, AppError> {
        self.repository.find_by_id_usuario(id_usuario).await
    }

    /// Inserts a sale when `id` is `None`, otherwise overwrites the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `nro_boleta` is already registered.
    /// Returns [`AppError::NotFound`] if `id` is given but absent.
    pub async fn save(&self, id: Option<i32>, data: NewVenta) -> Result<Venta, AppError> {
        let result = match id {
            None => self.repository.insert(data).await,
            Some(id) => self.repository.update(id, data).await.and_then(|updated| {
                updated.ok_or_else(|| {
                    AppError::not_found(VENTA_NOT_FOUND_MESSAGE, json!({ "id": id }))
                })
            }),
        };

        match result {
            Ok(venta) => {
                tracing::info!(
                    id_venta = venta.id,
                    id_usuario = venta.id_usuario,
                    nro_boleta = venta.nro_boleta,
                    "Venta saved"
                );
                Ok(venta)
            }
            Err(e @ AppError::Conflict { .. }) => {
                tracing::warn!(constraint = ?e.constraint(), "Venta rejected by unique constraint");
                Err(e.with_message(VENTA_CONFLICT_MESSAGE))
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes a sale; an absent id is silently ignored.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(id_venta = id, "Venta deleted");
        }
        Ok(())
    }

    /// Counts stored sales.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
