//! Named hyperlinks.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Relation name pointing at the resource itself.
pub const SELF_REL: &str = "self";

/// A single hyperlink with its relation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new(SELF_REL, href)
    }
}

#[derive(Serialize)]
struct Href<'a> {
    href: &'a str,
}

/// Ordered set of links, at most one per rel.
///
/// Serializes as `{ "<rel>": { "href": "..." }, ... }` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link. A link with the same rel is replaced in place.
    pub fn push(&mut self, link: Link) {
        match self.0.iter_mut().find(|l| l.rel == link.rel) {
            Some(existing) => existing.href = link.href,
            None => self.0.push(link),
        }
    }

    pub fn with(mut self, link: Link) -> Self {
        self.push(link);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|l| l.rel == rel)
    }

    pub fn rels(&self) -> Vec<&str> {
        self.0.iter().map(|l| l.rel.as_str()).collect()
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut links = Links::new();
        for link in iter {
            links.push(link);
        }
        links
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(&link.rel, &Href { href: &link.href })?;
        }
        map.end()
    }
}
