//! Handlers for the v2 venta endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::assemblers::RepresentationModelAssembler;
use crate::api::dto::message::DeleteResponse;
use crate::api::dto::venta::{VentaRequest, VentaResponse};
use crate::api::hateoas::{CollectionModel, EntityModel};
use crate::application::services::venta_service::VENTA_NOT_FOUND_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

pub const VENTA_DELETED_MESSAGE: &str = "Venta eliminada exitosamente";

/// Lists all ventas.
///
/// # Endpoint
///
/// `GET /api/v2/ventas`
pub async fn list_ventas_handler(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<VentaResponse>>, AppError> {
    let ventas = state.venta_service.find_all().await?;
    let assembler = &state.venta_assembler;

    Ok(Json(
        assembler.to_collection_model(ventas, assembler.collection_link()),
    ))
}

/// Lists the ventas of one usuario.
///
/// # Endpoint
///
/// `GET /api/v2/ventas/usuario/{id_usuario}`
///
/// The usuario service is not consulted: an unknown usuario simply has no
/// ventas and yields an empty collection.
pub async fn list_ventas_by_usuario_handler(
    State(state): State<AppState>,
    Path(id_usuario): Path<i32>,
) -> Result<Json<CollectionModel<VentaResponse>>, AppError> {
    let ventas = state
        .venta_service
        .get_ventas_by_usuario_id(id_usuario)
        .await?;
    let assembler = &state.venta_assembler;

    Ok(Json(
        assembler.to_collection_model(ventas, assembler.by_usuario_link(id_usuario)),
    ))
}

/// Returns one venta with its links.
///
/// # Endpoint
///
/// `GET /api/v2/ventas/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn get_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EntityModel<VentaResponse>>, AppError> {
    let venta = state
        .venta_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(VENTA_NOT_FOUND_MESSAGE, json!({ "id": id })))?;

    Ok(Json(state.venta_assembler.to_model(venta)))
}

/// Creates a venta.
///
/// # Endpoint
///
/// `POST /api/v2/ventas`
///
/// # Request Body
///
/// ```json
/// {
///   "id_usuario": 1,
///   "nro_boleta": 56985,
///   "fecha_compra": "25/12/2025",
///   "producto": "PerfumeTest",
///   "cantidad": 5,
///   "total": 99999
/// }
/// ```
///
/// `id_usuario` is stored as given, whether or not the usuario exists.
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 409 Conflict if the `nro_boleta` is already registered
pub async fn create_venta_handler(
    State(state): State<AppState>,
    Json(payload): Json<VentaRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<EntityModel<VentaResponse>>,
    ),
    AppError,
> {
    payload.validate()?;

    let venta = state.venta_service.save(None, payload.into()).await?;
    let model = state.venta_assembler.to_model(venta);
    let location = model.self_href().unwrap_or_default().to_string();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(model),
    ))
}

/// Overwrites every field of an existing venta.
///
/// # Endpoint
///
/// `PUT /api/v2/ventas/{id}`
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 404 Not Found if the id does not exist
/// - 409 Conflict if the new `nro_boleta` belongs to another venta
pub async fn update_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VentaRequest>,
) -> Result<Json<EntityModel<VentaResponse>>, AppError> {
    payload.validate()?;

    state.venta_service.get_by_id_or_fail(id).await?;
    let venta = state.venta_service.save(Some(id), payload.into()).await?;

    Ok(Json(state.venta_assembler.to_model(venta)))
}

/// Deletes a venta.
///
/// # Endpoint
///
/// `DELETE /api/v2/ventas/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.venta_service.get_by_id_or_fail(id).await?;
    state.venta_service.delete(id).await?;

    Ok(Json(DeleteResponse::new(
        VENTA_DELETED_MESSAGE,
        vec![state.venta_assembler.collection_href()],
    )))
}
