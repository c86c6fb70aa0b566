//! Route templates shared by the router and the link assemblers.
//!
//! Routes are registered from these constants and links are expanded from
//! them, so a link always matches the pattern of the endpoint it points to.

use std::fmt::Display;

pub const HEALTH: &str = "/health";

pub const USUARIOS: &str = "/api/v2/usuarios";
pub const USUARIO_BY_ID: &str = "/api/v2/usuarios/{id}";

pub const VENTAS: &str = "/api/v2/ventas";
pub const VENTA_BY_ID: &str = "/api/v2/ventas/{id}";
pub const VENTAS_BY_USUARIO: &str = "/api/v2/ventas/usuario/{id_usuario}";

pub const V1_USUARIOS: &str = "/api/v1/usuarios";
pub const V1_USUARIOS_LIST: &str = "/api/v1/usuarios/listar";
pub const V1_USUARIO_BY_ID: &str = "/api/v1/usuarios/{id}";

pub const V1_VENTAS: &str = "/api/v1/ventas";
pub const V1_VENTAS_LIST: &str = "/api/v1/ventas/listar";
pub const V1_VENTA_BY_ID: &str = "/api/v1/ventas/{id}";
pub const V1_VENTAS_BY_USUARIO: &str = "/api/v1/ventas/usuario/{id_usuario}";

/// Substitutes the path parameter of `template` with `value`.
///
/// Templates carry at most one `{param}` segment. Templates without one are
/// returned unchanged.
pub fn expand(template: &str, value: impl Display) -> String {
    match (template.find('{'), template.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}{}", &template[..start], value, &template[end + 1..])
        }
        _ => template.to_string(),
    }
}
