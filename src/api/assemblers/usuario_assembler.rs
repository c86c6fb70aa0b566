//! Representation of usuarios.

use crate::api::dto::usuario::UsuarioResponse;
use crate::api::hateoas::{EntityModel, Link, LinkBuilder, Links};
use crate::api::paths::{self, expand};
use crate::config::ServiceKind;
use crate::domain::entities::Usuario;

use super::RepresentationModelAssembler;

pub const REL_USUARIOS: &str = "usuarios";
pub const REL_VENTAS: &str = "ventas";

/// Links a usuario to itself, the usuario collection, and its sales in the
/// venta service.
#[derive(Debug, Clone)]
pub struct UsuarioAssembler {
    links: LinkBuilder,
}

impl UsuarioAssembler {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }

    /// Href of the usuario collection.
    pub fn collection_href(&self) -> String {
        self.links.own(paths::USUARIOS)
    }

    pub fn collection_link(&self) -> Link {
        Link::self_link(self.collection_href())
    }
}

impl RepresentationModelAssembler for UsuarioAssembler {
    type Entity = Usuario;
    type Content = UsuarioResponse;

    const EMBEDDED_REL: &'static str = "usuarioList";

    fn to_model(&self, usuario: Usuario) -> EntityModel<UsuarioResponse> {
        let links = Links::new()
            .with(Link::self_link(
                self.links.own(&expand(paths::USUARIO_BY_ID, usuario.id)),
            ))
            .with(Link::new(REL_USUARIOS, self.collection_href()))
            .with(Link::new(
                REL_VENTAS,
                self.links.peer(
                    ServiceKind::Venta,
                    &expand(paths::VENTAS_BY_USUARIO, usuario.id),
                ),
            ));

        EntityModel::new(usuario.into(), links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usuario(id: i32) -> Usuario {
        Usuario::new(
            id,
            "12345678-9".to_string(),
            "Hector".to_string(),
            "Robledo".to_string(),
            "hector@mail.com".to_string(),
        )
    }

    fn assembler(own_base: Option<&str>) -> UsuarioAssembler {
        UsuarioAssembler::new(
            LinkBuilder::new(own_base.map(str::to_string))
                .with_service(ServiceKind::Venta, "http://ventas:9090"),
        )
    }

    #[test]
    fn test_exactly_three_links() {
        let model = assembler(None).to_model(usuario(7));

        assert_eq!(model.links.rels(), vec!["self", "usuarios", "ventas"]);
        assert_eq!(model.links.get("self").unwrap().href, "/api/v2/usuarios/7");
        assert_eq!(model.links.get("usuarios").unwrap().href, "/api/v2/usuarios");
        assert_eq!(
            model.links.get("ventas").unwrap().href,
            "http://ventas:9090/api/v2/ventas/usuario/7"
        );
    }

    #[test]
    fn test_public_base_applies_to_own_links_only() {
        let model = assembler(Some("https://usuarios.example.com")).to_model(usuario(2));

        assert_eq!(
            model.links.get("self").unwrap().href,
            "https://usuarios.example.com/api/v2/usuarios/2"
        );
        assert_eq!(
            model.links.get("ventas").unwrap().href,
            "http://ventas:9090/api/v2/ventas/usuario/2"
        );
    }

    #[test]
    fn test_wire_format() {
        let model = assembler(None).to_model(usuario(1));

        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({
                "id_usuario": 1,
                "rut": "12345678-9",
                "nombres": "Hector",
                "apellidos": "Robledo",
                "correo": "hector@mail.com",
                "_links": {
                    "self": { "href": "/api/v2/usuarios/1" },
                    "usuarios": { "href": "/api/v2/usuarios" },
                    "ventas": { "href": "http://ventas:9090/api/v2/ventas/usuario/1" }
                }
            })
        );
    }

    #[test]
    fn test_collection_keeps_order() {
        let a = assembler(None);
        let collection = a.to_collection_model(vec![usuario(3), usuario(1)], a.collection_link());
        let value = serde_json::to_value(&collection).unwrap();

        let list = value["_embedded"]["usuarioList"].as_array().unwrap();
        assert_eq!(list[0]["id_usuario"], 3);
        assert_eq!(list[1]["id_usuario"], 1);
        assert_eq!(value["_links"]["self"]["href"], "/api/v2/usuarios");
    }
}
