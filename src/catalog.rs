// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a catalog from JSON.
//!
//! The file is a single object mapping category labels to entry lists. Key
//! order in the file is the declared category order:
//!
//! ```json
//! {
//!   "GERADORES": [
//!     {"id": "cpf-generator", "name": "Gerador CPF", "description": "Gera CPFs válidos"}
//!   ],
//!   "VALIDADORES": [
//!     {"id": "cpf-validator", "name": "Validador CPF"}
//!   ]
//! }
//! ```
//!
//! `id` is required. A missing or null `name`/`description` loads as an empty
//! string so one sloppy entry matches fewer queries instead of failing the
//! whole catalog. A label that appears twice is a
//! [`CatalogError::DuplicateCategory`].

use crate::error::CatalogError;
use crate::types::{Catalog, CatalogEntry};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct RawEntry {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Top-level document, with every `label: [entries]` pair kept in file order.
///
/// Read as a raw list of pairs rather than a map so a repeated label reaches
/// the builder instead of overwriting the earlier list.
enum RawCatalog {
    Categories(Vec<(String, Vec<RawEntry>)>),
    NotAnObject,
}

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawCatalogVisitor)
    }
}

struct RawCatalogVisitor;

impl<'de> Visitor<'de> for RawCatalogVisitor {
    type Value = RawCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping category labels to entry lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawCatalog, A::Error> {
        let mut categories = Vec::new();
        while let Some(pair) = map.next_entry::<String, Vec<RawEntry>>()? {
            categories.push(pair);
        }
        Ok(RawCatalog::Categories(categories))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawCatalog, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawCatalog, E> {
        Ok(RawCatalog::NotAnObject)
    }
}

impl Catalog {
    /// Parse a catalog from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let RawCatalog::Categories(categories) = serde_json::from_str::<RawCatalog>(json)? else {
            return Err(CatalogError::NotAnObject);
        };

        let mut builder = Catalog::builder();
        for (label, entries) in categories {
            builder.declare_category(label.as_str())?;

            for raw in entries {
                if raw.name.is_none() {
                    tracing::warn!(id = %raw.id, category = %label, "catalog entry has no name");
                }
                builder.add(CatalogEntry::new(
                    raw.id,
                    raw.name.unwrap_or_default(),
                    raw.description.unwrap_or_default(),
                    label.as_str(),
                ))?;
            }
        }

        Ok(builder.build())
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories().len(),
            entries = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
