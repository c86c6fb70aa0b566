//! v1 usuario endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::message::{LegacyNotFound, LegacyUsuarioConflict};
use crate::api::dto::usuario::{UsuarioRequest, UsuarioResponse};
use crate::api::paths::{self, expand};
use crate::error::AppError;
use crate::state::AppState;

pub const EMAIL_REGISTERED_MESSAGE: &str = "El email ya está registrado";

fn not_found_message(id: i32) -> String {
    format!("No se encontró el usuario con ese ID: {id}")
}

fn conflict_response() -> Response {
    (
        StatusCode::CONFLICT,
        Json(LegacyUsuarioConflict {
            messege: EMAIL_REGISTERED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// `GET /api/v1/usuarios/listar`
pub async fn list_usuarios_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsuarioResponse>>, AppError> {
    let usuarios = state.usuario_service.find_all().await?;

    Ok(Json(usuarios.into_iter().map(Into::into).collect()))
}

/// `GET /api/v1/usuarios/{id}`
pub async fn get_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let response = match state.usuario_service.get_by_id(id).await? {
        Some(usuario) => Json(UsuarioResponse::from(usuario)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(LegacyNotFound::new(not_found_message(id))),
        )
            .into_response(),
    };

    Ok(response)
}

/// `POST /api/v1/usuarios`
///
/// Returns 201 with the created usuario and its v1 `Location`, or 409 with
/// `{"messege": "El email ya está registrado"}` when the `rut` or `correo`
/// is taken.
pub async fn create_usuario_handler(
    State(state): State<AppState>,
    Json(payload): Json<UsuarioRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    match state.usuario_service.save(None, payload.into()).await {
        Ok(usuario) => {
            let location = state.links.own(&expand(paths::V1_USUARIO_BY_ID, usuario.id));
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(UsuarioResponse::from(usuario)),
            )
                .into_response())
        }
        Err(AppError::Conflict { .. }) => Ok(conflict_response()),
        Err(e) => Err(e),
    }
}

/// `PUT /api/v1/usuarios/{id}`
///
/// Returns 404 with an empty body when the id does not exist.
pub async fn update_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UsuarioRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    if state.usuario_service.get_by_id(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    match state.usuario_service.save(Some(id), payload.into()).await {
        Ok(usuario) => Ok(Json(UsuarioResponse::from(usuario)).into_response()),
        Err(AppError::NotFound { .. }) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(AppError::Conflict { .. }) => Ok(conflict_response()),
        Err(e) => Err(e),
    }
}

/// `DELETE /api/v1/usuarios/{id}`
///
/// Returns 204 on success and 404 with an empty body when the id does not
/// exist.
pub async fn delete_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.usuario_service.get_by_id(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.usuario_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
