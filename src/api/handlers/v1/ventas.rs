//! v1 venta endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::message::{LegacyNotFound, LegacyVentaConflict};
use crate::api::dto::venta::{VentaRequest, VentaResponse};
use crate::api::paths::{self, expand};
use crate::error::AppError;
use crate::state::AppState;

pub const BOLETA_REGISTERED_MESSAGE: &str = "El número de boleta ya está registrado";

fn not_found_message(id: i32) -> String {
    format!("No se encontró la venta con ese ID: {id}")
}

fn conflict_response() -> Response {
    (
        StatusCode::CONFLICT,
        Json(LegacyVentaConflict {
            message: BOLETA_REGISTERED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// `GET /api/v1/ventas/listar`
pub async fn list_ventas_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VentaResponse>>, AppError> {
    let ventas = state.venta_service.find_all().await?;

    Ok(Json(ventas.into_iter().map(Into::into).collect()))
}

/// `GET /api/v1/ventas/usuario/{id_usuario}`
pub async fn list_ventas_by_usuario_handler(
    State(state): State<AppState>,
    Path(id_usuario): Path<i32>,
) -> Result<Json<Vec<VentaResponse>>, AppError> {
    let ventas = state
        .venta_service
        .get_ventas_by_usuario_id(id_usuario)
        .await?;

    Ok(Json(ventas.into_iter().map(Into::into).collect()))
}

/// `GET /api/v1/ventas/{id}`
pub async fn get_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let response = match state.venta_service.get_by_id(id).await? {
        Some(venta) => Json(VentaResponse::from(venta)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(LegacyNotFound::new(not_found_message(id))),
        )
            .into_response(),
    };

    Ok(response)
}

/// `POST /api/v1/ventas`
///
/// Returns 201 with the created venta, or 409 when the `nro_boleta` is taken.
pub async fn create_venta_handler(
    State(state): State<AppState>,
    Json(payload): Json<VentaRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    match state.venta_service.save(None, payload.into()).await {
        Ok(venta) => {
            let location = state.links.own(&expand(paths::V1_VENTA_BY_ID, venta.id));
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(VentaResponse::from(venta)),
            )
                .into_response())
        }
        Err(AppError::Conflict { .. }) => Ok(conflict_response()),
        Err(e) => Err(e),
    }
}

/// `PUT /api/v1/ventas/{id}`
///
/// Returns 404 with an empty body when the id does not exist.
pub async fn update_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VentaRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    if state.venta_service.get_by_id(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    match state.venta_service.save(Some(id), payload.into()).await {
        Ok(venta) => Ok(Json(VentaResponse::from(venta)).into_response()),
        Err(AppError::NotFound { .. }) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(AppError::Conflict { .. }) => Ok(conflict_response()),
        Err(e) => Err(e),
    }
}

/// `DELETE /api/v1/ventas/{id}`
///
/// Returns 204 on success and 404 with an empty body when the id does not
/// exist.
pub async fn delete_venta_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.venta_service.get_by_id(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.venta_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
