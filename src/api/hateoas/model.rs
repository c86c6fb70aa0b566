//! HAL representations for single entities and collections.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::link::{Link, Links, SELF_REL};

/// An entity's fields plus its `_links`.
#[derive(Debug, Clone, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }

    /// Href of the `self` link, used for `Location` headers.
    pub fn self_href(&self) -> Option<&str> {
        self.links.get(SELF_REL).map(|l| l.href.as_str())
    }
}

/// A list of entity models under `_embedded.<rel>` plus collection links.
///
/// `_embedded` is left out entirely when there are no items.
#[derive(Debug, Clone)]
pub struct CollectionModel<T> {
    rel: &'static str,
    items: Vec<EntityModel<T>>,
    links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(rel: &'static str, items: Vec<EntityModel<T>>) -> Self {
        Self {
            rel,
            items,
            links: Links::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

struct Embedded<'a, T> {
    rel: &'static str,
    items: &'a [EntityModel<T>],
}

impl<T: Serialize> Serialize for Embedded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.rel, self.items)?;
        map.end()
    }
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.items.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.items.is_empty() {
            map.serialize_entry(
                "_embedded",
                &Embedded {
                    rel: self.rel,
                    items: &self.items,
                },
            )?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}
