// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Entries, the categories that group them, the catalog that owns both, the
//! normalized query, and the grouped result handed back to a UI surface.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Catalog**: entry ids are unique across all categories, and no category
//!   is empty. `CatalogBuilder` enforces both; there is no other way in.
//!
//! - **CatalogEntry**: `search` is always the case-folded view of `name`,
//!   `description` and `id`. The fields are private to the crate so the two
//!   cannot drift apart.
//!
//! - **MatchResult**: groups follow the catalog's category order, entries
//!   within a group follow catalog order, and no group is empty.

use crate::error::CatalogError;
use crate::utils::{char_len, fold_case, normalize};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

// =============================================================================
// ENTRIES
// =============================================================================

/// Case-folded searchable fields of one entry, computed once at build time.
///
/// Recomputing these on every keystroke would be the dominant cost of a
/// search pass, so the catalog pays it up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText {
    pub name: String,
    pub description: String,
    pub id: String,
    /// `name + " " + description + " " + id`
    pub combined: String,
}

impl SearchText {
    pub fn new(name: &str, description: &str, id: &str) -> Self {
        let name = fold_case(name);
        let description = fold_case(description);
        let id = fold_case(id);
        let combined = format!("{} {} {}", name, description, id);
        Self {
            name,
            description,
            id,
            combined,
        }
    }

    /// Whitespace-separated words of the combined text.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.combined.split_whitespace()
    }
}

/// One searchable record of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) search: SearchText,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let name = name.into();
        let description = description.into();
        let search = SearchText::new(&name, &description, &id);
        Self {
            id,
            name,
            description,
            category: category.into(),
            search,
        }
    }

    /// Stable selection key, unique across the catalog.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search_text(&self) -> &SearchText {
        &self.search
    }
}

impl Serialize for CatalogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CatalogEntry", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("category", &self.category)?;
        state.end()
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// A labelled, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) label: String,
    pub(crate) entries: Vec<CatalogEntry>,
}

impl Category {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

/// The immutable, pre-grouped catalog every search runs against.
///
/// Read-only once built: share `&Catalog` between as many surfaces as needed.
///
/// No category is empty. A category declared without entries (`"LABEL": []`
/// in a JSON catalog) is dropped at build time, so it never shows up in a
/// search result, not even for the empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) categories: Vec<Category>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build from entries in order; categories appear in first-seen order.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut builder = Self::builder();
        for entry in entries {
            builder.add(entry)?;
        }
        Ok(builder.build())
    }

    /// Categories in declared order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// All entries, category by category.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries().find(|e| e.id == id)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Incremental catalog construction with id-uniqueness checks.
///
/// Categories keep the order in which they were declared or first used.
/// Categories that end up with no entries are dropped by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
    /// id → index of the category that owns it
    owners: HashMap<String, usize>,
}

impl CatalogBuilder {
    /// Reserve a category's position before any of its entries arrive.
    pub fn declare_category(
        &mut self,
        label: impl Into<String>,
    ) -> Result<&mut Self, CatalogError> {
        let label = label.into();
        if self.position(&label).is_some() {
            return Err(CatalogError::DuplicateCategory(label));
        }
        self.categories.push(Category {
            label,
            entries: Vec::new(),
        });
        Ok(self)
    }

    /// Append an entry to its category, creating the category if unseen.
    pub fn add(&mut self, entry: CatalogEntry) -> Result<&mut Self, CatalogError> {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::EmptyId {
                category: entry.category,
            });
        }

        if let Some(&first) = self.owners.get(&entry.id) {
            return Err(CatalogError::DuplicateId {
                id: entry.id,
                first: self.categories[first].label.clone(),
                second: entry.category,
            });
        }

        let slot = match self.position(&entry.category) {
            Some(slot) => slot,
            None => {
                self.categories.push(Category {
                    label: entry.category.clone(),
                    entries: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        self.owners.insert(entry.id.clone(), slot);
        self.categories[slot].entries.push(entry);
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        let categories = self
            .categories
            .into_iter()
            .filter(|c| {
                if c.entries.is_empty() {
                    tracing::debug!(category = %c.label, "dropping empty category");
                }
                !c.entries.is_empty()
            })
            .collect();
        Catalog { categories }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.label == label)
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// A trimmed, case-folded query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    len: usize,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let text = normalize(raw);
        let len = char_len(&text);
        Self { text, len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// The matching entries of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatches<'c> {
    pub label: &'c str,
    pub entries: Vec<&'c CatalogEntry>,
}

/// Category-ordered grouping of the entries that satisfied a matcher.
///
/// Serializes as a JSON object `{label: [entry, ...]}` in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult<'c> {
    groups: Vec<CategoryMatches<'c>>,
}

impl<'c> MatchResult<'c> {
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Callers must not pass empty groups.
    pub(crate) fn from_groups(groups: Vec<CategoryMatches<'c>>) -> Self {
        debug_assert!(groups.iter().all(|g| !g.entries.is_empty()));
        Self { groups }
    }

    pub fn groups(&self) -> &[CategoryMatches<'c>] {
        &self.groups
    }

    pub fn labels(&self) -> impl Iterator<Item = &'c str> + '_ {
        self.groups.iter().map(|g| g.label)
    }

    pub fn entries(&self) -> impl Iterator<Item = &'c CatalogEntry> + '_ {
        self.groups.iter().flat_map(|g| g.entries.iter().copied())
    }

    pub fn group(&self, label: &str) -> Option<&CategoryMatches<'c>> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn get(&self, id: &str) -> Option<&'c CatalogEntry> {
        self.entries().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Total number of matching entries.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// The "no results" state.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for MatchResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.label, &group.entries)?;
        }
        map.end()
    }
}
