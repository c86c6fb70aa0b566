//! Usuario entity representing a registered user.

/// A persisted user.
///
/// `rut` and `correo` are each unique across all users; the storage layer
/// enforces it through the `usuario_rut_key` and `usuario_correo_key`
/// constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub id: i32,
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
}

impl Usuario {
    /// Creates a new Usuario instance.
    pub fn new(id: i32, rut: String, nombres: String, apellidos: String, correo: String) -> Self {
        Self {
            id,
            rut,
            nombres,
            apellidos,
            correo,
        }
    }

    /// Builds a persisted user from its id and field data.
    pub fn from_data(id: i32, data: NewUsuario) -> Self {
        Self::new(id, data.rut, data.nombres, data.apellidos, data.correo)
    }
}

/// Field data for creating or fully overwriting a user.
///
/// Carries every column except the id, so an overwrite never leaves stale
/// fields behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsuario {
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
}

impl From<Usuario> for NewUsuario {
    fn from(u: Usuario) -> Self {
        Self {
            rut: u.rut,
            nombres: u.nombres,
            apellidos: u.apellidos,
            correo: u.correo,
        }
    }
}
