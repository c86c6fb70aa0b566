//! Message bodies shared by the usuario and venta endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of a successful v2 delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub mensaje: String,
    pub timestamp: DateTime<Utc>,
    /// Hrefs the client can follow next.
    pub links: Vec<String>,
}

impl DeleteResponse {
    pub fn new(mensaje: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            timestamp: Utc::now(),
            links,
        }
    }
}

/// v1 not-found body.
///
/// `status` is the code as a string.
#[derive(Debug, Serialize)]
pub struct LegacyNotFound {
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl LegacyNotFound {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "404".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// v1 conflict body of the usuario service. Clients read the `messege` key.
#[derive(Debug, Serialize)]
pub struct LegacyUsuarioConflict {
    pub messege: String,
}

/// v1 conflict body of the venta service.
#[derive(Debug, Serialize)]
pub struct LegacyVentaConflict {
    pub message: String,
}
