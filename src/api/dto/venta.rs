//! DTOs for venta endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewVenta, Venta};

/// Body of `POST` and `PUT` on ventas.
///
/// Field names are accepted in snake case or camel case.
#[derive(Debug, Deserialize, Validate)]
pub struct VentaRequest {
    #[serde(alias = "idUsuario")]
    #[validate(range(min = 1))]
    pub id_usuario: i32,

    #[serde(alias = "nroBoleta")]
    #[validate(range(min = 1))]
    pub nro_boleta: i32,

    #[serde(alias = "fechaCompra")]
    #[validate(length(min = 1, max = 20))]
    pub fecha_compra: String,

    #[validate(length(min = 1, max = 200))]
    pub producto: String,

    #[validate(range(min = 1))]
    pub cantidad: i32,

    #[validate(range(min = 0))]
    pub total: i32,
}

impl From<VentaRequest> for NewVenta {
    fn from(req: VentaRequest) -> Self {
        Self {
            id_usuario: req.id_usuario,
            nro_boleta: req.nro_boleta,
            fecha_compra: req.fecha_compra,
            producto: req.producto,
            cantidad: req.cantidad,
            total: req.total,
        }
    }
}

/// Venta as sent to clients, on both API versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VentaResponse {
    #[serde(rename = "id_venta")]
    pub id: i32,
    #[serde(rename = "idUsuario")]
    pub id_usuario: i32,
    #[serde(rename = "nroBoleta")]
    pub nro_boleta: i32,
    #[serde(rename = "fechaCompra")]
    pub fecha_compra: String,
    pub producto: String,
    pub cantidad: i32,
    pub total: i32,
}

impl From<Venta> for VentaResponse {
    fn from(v: Venta) -> Self {
        Self {
            id: v.id,
            id_usuario: v.id_usuario,
            nro_boleta: v.nro_boleta,
            fecha_compra: v.fecha_compra,
            producto: v.producto,
            cantidad: v.cantidad,
            total: v.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_both_casings() {
        let snake: VentaRequest = serde_json::from_value(json!({
            "id_usuario": 1, "nro_boleta": 10, "fecha_compra": "2025-06-01",
            "producto": "Crema", "cantidad": 2, "total": 3000
        }))
        .unwrap();
        let camel: VentaRequest = serde_json::from_value(json!({
            "idUsuario": 1, "nroBoleta": 10, "fechaCompra": "2025-06-01",
            "producto": "Crema", "cantidad": 2, "total": 3000
        }))
        .unwrap();

        assert_eq!(NewVenta::from(snake), NewVenta::from(camel));
    }

    #[test]
    fn test_request_validation() {
        let mut req: VentaRequest = serde_json::from_value(json!({
            "id_usuario": 1, "nro_boleta": 10, "fecha_compra": "25/12/2025",
            "producto": "Crema", "cantidad": 2, "total": 0
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        req.cantidad = 0;
        req.id_usuario = 0;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cantidad"));
        assert!(errors.field_errors().contains_key("id_usuario"));
    }

    #[test]
    fn test_response_field_names() {
        let response = VentaResponse::from(Venta {
            id: 4,
            id_usuario: 2,
            nro_boleta: 56985,
            fecha_compra: "25/12/2025".to_string(),
            producto: "PerfumeTest".to_string(),
            cantidad: 5,
            total: 99999,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "id_venta": 4,
                "idUsuario": 2,
                "nroBoleta": 56985,
                "fechaCompra": "25/12/2025",
                "producto": "PerfumeTest",
                "cantidad": 5,
                "total": 99999
            })
        );
    }
}
