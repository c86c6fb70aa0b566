//! Handlers for the v2 usuario endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::assemblers::RepresentationModelAssembler;
use crate::api::dto::message::DeleteResponse;
use crate::api::dto::usuario::{UsuarioRequest, UsuarioResponse};
use crate::api::hateoas::{CollectionModel, EntityModel};
use crate::application::services::usuario_service::USUARIO_NOT_FOUND_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

pub const USUARIO_DELETED_MESSAGE: &str = "Usuario eliminado exitosamente";

/// Lists all usuarios.
///
/// # Endpoint
///
/// `GET /api/v2/usuarios`
///
/// # Response
///
/// ```json
/// {
///   "_embedded": { "usuarioList": [ { "id_usuario": 1, "...": "...", "_links": { } } ] },
///   "_links": { "self": { "href": "/api/v2/usuarios" } }
/// }
/// ```
pub async fn list_usuarios_handler(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<UsuarioResponse>>, AppError> {
    let usuarios = state.usuario_service.find_all().await?;
    let assembler = &state.usuario_assembler;

    Ok(Json(
        assembler.to_collection_model(usuarios, assembler.collection_link()),
    ))
}

/// Returns one usuario with its links.
///
/// # Endpoint
///
/// `GET /api/v2/usuarios/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn get_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EntityModel<UsuarioResponse>>, AppError> {
    let usuario = state
        .usuario_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(USUARIO_NOT_FOUND_MESSAGE, json!({ "id": id })))?;

    Ok(Json(state.usuario_assembler.to_model(usuario)))
}

/// Creates a usuario.
///
/// # Endpoint
///
/// `POST /api/v2/usuarios`
///
/// # Request Body
///
/// ```json
/// {
///   "rut": "12345678-9",
///   "nombres": "Hector",
///   "apellidos": "Robledo",
///   "correo": "hector@mail.com"
/// }
/// ```
///
/// # Response
///
/// 201 Created with the representation and a `Location` header pointing at
/// its `self` link.
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 409 Conflict if the `rut` or `correo` is already registered
pub async fn create_usuario_handler(
    State(state): State<AppState>,
    Json(payload): Json<UsuarioRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<EntityModel<UsuarioResponse>>,
    ),
    AppError,
> {
    payload.validate()?;

    let usuario = state.usuario_service.save(None, payload.into()).await?;
    let model = state.usuario_assembler.to_model(usuario);
    let location = model.self_href().unwrap_or_default().to_string();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(model),
    ))
}

/// Overwrites every field of an existing usuario.
///
/// # Endpoint
///
/// `PUT /api/v2/usuarios/{id}`
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 404 Not Found if the id does not exist
/// - 409 Conflict if the new `rut` or `correo` belongs to another usuario
pub async fn update_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UsuarioRequest>,
) -> Result<Json<EntityModel<UsuarioResponse>>, AppError> {
    payload.validate()?;

    state.usuario_service.get_by_id_or_fail(id).await?;
    let usuario = state.usuario_service.save(Some(id), payload.into()).await?;

    Ok(Json(state.usuario_assembler.to_model(usuario)))
}

/// Deletes a usuario.
///
/// # Endpoint
///
/// `DELETE /api/v2/usuarios/{id}`
///
/// # Response
///
/// ```json
/// {
///   "mensaje": "Usuario eliminado exitosamente",
///   "timestamp": "2025-06-26T12:00:00Z",
///   "links": ["/api/v2/usuarios"]
/// }
/// ```
///
/// Sales of the usuario in the venta service are left untouched.
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_usuario_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.usuario_service.get_by_id_or_fail(id).await?;
    state.usuario_service.delete(id).await?;

    Ok(Json(DeleteResponse::new(
        USUARIO_DELETED_MESSAGE,
        vec![state.usuario_assembler.collection_href()],
    )))
}
