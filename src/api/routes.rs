//! API route configuration.
//!
//! Paths come from [`crate::api::paths`], the same templates the assemblers
//! expand into links.

use crate::api::handlers::{usuarios, v1, ventas};
use crate::api::paths;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes of the usuario service.
///
/// # Endpoints
///
/// - `GET    /api/v2/usuarios`        - List usuarios (HAL collection)
/// - `POST   /api/v2/usuarios`        - Create a usuario
/// - `GET    /api/v2/usuarios/{id}`   - Get a usuario with links
/// - `PUT    /api/v2/usuarios/{id}`   - Overwrite a usuario
/// - `DELETE /api/v2/usuarios/{id}`   - Delete a usuario
/// - `GET    /api/v1/usuarios/listar` - List usuarios (plain JSON)
/// - `POST   /api/v1/usuarios`        - Create a usuario
/// - `GET|PUT|DELETE /api/v1/usuarios/{id}`
pub fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route(
            paths::USUARIOS,
            get(usuarios::list_usuarios_handler).post(usuarios::create_usuario_handler),
        )
        .route(
            paths::USUARIO_BY_ID,
            get(usuarios::get_usuario_handler)
                .put(usuarios::update_usuario_handler)
                .delete(usuarios::delete_usuario_handler),
        )
        .route(
            paths::V1_USUARIOS_LIST,
            get(v1::usuarios::list_usuarios_handler),
        )
        .route(
            paths::V1_USUARIOS,
            post(v1::usuarios::create_usuario_handler),
        )
        .route(
            paths::V1_USUARIO_BY_ID,
            get(v1::usuarios::get_usuario_handler)
                .put(v1::usuarios::update_usuario_handler)
                .delete(v1::usuarios::delete_usuario_handler),
        )
}

/// Routes of the venta service.
///
/// # Endpoints
///
/// - `GET    /api/v2/ventas`                      - List ventas (HAL collection)
/// - `POST   /api/v2/ventas`                      - Create a venta
/// - `GET    /api/v2/ventas/usuario/{id_usuario}` - Ventas of one usuario
/// - `GET|PUT|DELETE /api/v2/ventas/{id}`
/// - `GET    /api/v1/ventas/listar`               - List ventas (plain JSON)
/// - `GET    /api/v1/ventas/usuario/{id_usuario}` - Ventas of one usuario
/// - `POST   /api/v1/ventas`                      - Create a venta
/// - `GET|PUT|DELETE /api/v1/ventas/{id}`
pub fn venta_routes() -> Router<AppState> {
    Router::new()
        .route(
            paths::VENTAS,
            get(ventas::list_ventas_handler).post(ventas::create_venta_handler),
        )
        .route(
            paths::VENTAS_BY_USUARIO,
            get(ventas::list_ventas_by_usuario_handler),
        )
        .route(
            paths::VENTA_BY_ID,
            get(ventas::get_venta_handler)
                .put(ventas::update_venta_handler)
                .delete(ventas::delete_venta_handler),
        )
        .route(paths::V1_VENTAS_LIST, get(v1::ventas::list_ventas_handler))
        .route(
            paths::V1_VENTAS_BY_USUARIO,
            get(v1::ventas::list_ventas_by_usuario_handler),
        )
        .route(paths::V1_VENTAS, post(v1::ventas::create_venta_handler))
        .route(
            paths::V1_VENTA_BY_ID,
            get(v1::ventas::get_venta_handler)
                .put(v1::ventas::update_venta_handler)
                .delete(v1::ventas::delete_venta_handler),
        )
}
