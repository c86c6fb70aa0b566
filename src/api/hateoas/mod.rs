//! Hypermedia primitives for the v2 surface.
//!
//! Responses follow the HAL convention: an entity carries its links under
//! `_links`, a collection nests its items under `_embedded`.
//!
//! - [`Link`] / [`Links`] - Named hyperlinks, unique per rel
//! - [`EntityModel`] / [`CollectionModel`] - Representations sent to clients
//! - [`LinkBuilder`] - Resolves paths against own and peer service bases

pub mod link;
pub mod link_builder;
pub mod model;

pub use link::{Link, Links};
pub use link_builder::LinkBuilder;
pub use model::{CollectionModel, EntityModel};
