//! Conversion of domain entities into HAL representations.
//!
//! Assemblers are the only place link shapes are decided. Handlers never
//! build hrefs themselves.

pub mod usuario_assembler;
pub mod venta_assembler;

pub use usuario_assembler::UsuarioAssembler;
pub use venta_assembler::VentaAssembler;

use serde::Serialize;

use crate::api::hateoas::{CollectionModel, EntityModel, Link};

/// Maps an entity to its representation.
pub trait RepresentationModelAssembler {
    type Entity;
    type Content: Serialize;

    /// Key of the item list under `_embedded`.
    const EMBEDDED_REL: &'static str;

    fn to_model(&self, entity: Self::Entity) -> EntityModel<Self::Content>;

    /// Maps every entity in order and attaches `self_link` to the collection.
    fn to_collection_model(
        &self,
        entities: Vec<Self::Entity>,
        self_link: Link,
    ) -> CollectionModel<Self::Content> {
        let items = entities.into_iter().map(|e| self.to_model(e)).collect();
        CollectionModel::new(Self::EMBEDDED_REL, items).with_link(self_link)
    }
}
