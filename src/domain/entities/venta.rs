//! Venta entity representing a single sale.

/// A persisted sale.
///
/// `id_usuario` is a plain integer reference to a user in the usuario
/// service. It is never checked against that service, so a sale may point at
/// a user that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venta {
    pub id: i32,
    pub id_usuario: i32,
    pub nro_boleta: i32,
    pub fecha_compra: String,
    pub producto: String,
    pub cantidad: i32,
    pub total: i32,
}

impl Venta {
    /// Builds a persisted sale from its id and field data.
    pub fn from_data(id: i32, data: NewVenta) -> Self {
        Self {
            id,
            id_usuario: data.id_usuario,
            nro_boleta: data.nro_boleta,
            fecha_compra: data.fecha_compra,
            producto: data.producto,
            cantidad: data.cantidad,
            total: data.total,
        }
    }
}

/// Field data for creating or fully overwriting a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenta {
    pub id_usuario: i32,
    pub nro_boleta: i32,
    pub fecha_compra: String,
    pub producto: String,
    pub cantidad: i32,
    pub total: i32,
}
