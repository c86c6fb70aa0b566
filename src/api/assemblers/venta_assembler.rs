//! Representation of ventas.

use crate::api::dto::venta::VentaResponse;
use crate::api::hateoas::{EntityModel, Link, LinkBuilder, Links};
use crate::api::paths::{self, expand};
use crate::config::ServiceKind;
use crate::domain::entities::Venta;

use super::RepresentationModelAssembler;

pub const REL_VENTAS_DEL_USUARIO: &str = "ventas-del-usuario";
pub const REL_TODAS_LAS_VENTAS: &str = "todas-las-ventas";
pub const REL_USUARIO: &str = "usuario";

/// Links a venta to itself, to sibling sales of the same user, to the venta
/// collection, and to its user in the usuario service.
///
/// The `usuario` link is built from the id alone; the user may not exist.
#[derive(Debug, Clone)]
pub struct VentaAssembler {
    links: LinkBuilder,
}

impl VentaAssembler {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }

    /// Href of the venta collection.
    pub fn collection_href(&self) -> String {
        self.links.own(paths::VENTAS)
    }

    pub fn collection_link(&self) -> Link {
        Link::self_link(self.collection_href())
    }

    /// Self link of the sales of one user.
    pub fn by_usuario_link(&self, id_usuario: i32) -> Link {
        Link::self_link(self.by_usuario_href(id_usuario))
    }

    fn by_usuario_href(&self, id_usuario: i32) -> String {
        self.links.own(&expand(paths::VENTAS_BY_USUARIO, id_usuario))
    }
}

impl RepresentationModelAssembler for VentaAssembler {
    type Entity = Venta;
    type Content = VentaResponse;

    const EMBEDDED_REL: &'static str = "ventaList";

    fn to_model(&self, venta: Venta) -> EntityModel<VentaResponse> {
        let links = Links::new()
            .with(Link::self_link(
                self.links.own(&expand(paths::VENTA_BY_ID, venta.id)),
            ))
            .with(Link::new(
                REL_VENTAS_DEL_USUARIO,
                self.by_usuario_href(venta.id_usuario),
            ))
            .with(Link::new(REL_TODAS_LAS_VENTAS, self.collection_href()))
            .with(Link::new(
                REL_USUARIO,
                self.links.peer(
                    ServiceKind::Usuario,
                    &expand(paths::USUARIO_BY_ID, venta.id_usuario),
                ),
            ));

        EntityModel::new(venta.into(), links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venta(id: i32, id_usuario: i32) -> Venta {
        Venta {
            id,
            id_usuario,
            nro_boleta: 56985,
            fecha_compra: "25/12/2025".to_string(),
            producto: "PerfumeTest".to_string(),
            cantidad: 5,
            total: 99999,
        }
    }

    fn assembler() -> VentaAssembler {
        VentaAssembler::new(
            LinkBuilder::new(None).with_service(ServiceKind::Usuario, "http://usuarios:8090"),
        )
    }

    #[test]
    fn test_exactly_four_links() {
        let model = assembler().to_model(venta(4, 9));

        assert_eq!(
            model.links.rels(),
            vec!["self", "ventas-del-usuario", "todas-las-ventas", "usuario"]
        );
        assert_eq!(model.links.get("self").unwrap().href, "/api/v2/ventas/4");
        assert_eq!(
            model.links.get("ventas-del-usuario").unwrap().href,
            "/api/v2/ventas/usuario/9"
        );
        assert_eq!(
            model.links.get("todas-las-ventas").unwrap().href,
            "/api/v2/ventas"
        );
    }

    #[test]
    fn test_usuario_link_is_string_exact() {
        let model = assembler().to_model(venta(1, 100));

        assert_eq!(
            model.links.get("usuario").unwrap().href,
            "http://usuarios:8090/api/v2/usuarios/100"
        );
    }

    #[test]
    fn test_by_usuario_collection() {
        let a = assembler();
        let collection =
            a.to_collection_model(vec![venta(1, 5), venta(2, 5)], a.by_usuario_link(5));
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value["_embedded"]["ventaList"].as_array().unwrap().len(), 2);
        assert_eq!(value["_links"]["self"]["href"], "/api/v2/ventas/usuario/5");
    }

    #[test]
    fn test_empty_collection() {
        let a = assembler();
        let value = serde_json::to_value(a.to_collection_model(vec![], a.collection_link())).unwrap();

        assert!(value.get("_embedded").is_none());
        assert_eq!(value["_links"]["self"]["href"], "/api/v2/ventas");
    }
}
