//! DTOs for usuario endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUsuario, Usuario};
use crate::utils::rut::RUT_REGEX;

/// Body of `POST` and `PUT` on usuarios.
///
/// The RUT is checked for shape only; a wrong check digit is accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct UsuarioRequest {
    #[validate(regex(path = "*RUT_REGEX", message = "RUT must have the form NNNNNNNN-D"))]
    pub rut: String,

    #[validate(length(min = 1, max = 100))]
    pub nombres: String,

    #[validate(length(min = 1, max = 100))]
    pub apellidos: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 150))]
    pub correo: String,
}

impl From<UsuarioRequest> for NewUsuario {
    fn from(req: UsuarioRequest) -> Self {
        Self {
            rut: req.rut,
            nombres: req.nombres,
            apellidos: req.apellidos,
            correo: req.correo,
        }
    }
}

/// Usuario as sent to clients, on both API versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsuarioResponse {
    #[serde(rename = "id_usuario")]
    pub id: i32,
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            rut: u.rut,
            nombres: u.nombres,
            apellidos: u.apellidos,
            correo: u.correo,
        }
    }
}
