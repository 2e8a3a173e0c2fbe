// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges: loading a catalog and loading match config.
//!
//! Matching and aggregation never fail. A query that finds nothing is an empty
//! result, not an error.

use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog must be a JSON object mapping category labels to entry lists")]
    NotAnObject,

    #[error("Duplicate entry id '{id}' (first in '{first}', again in '{second}')")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Category '{0}' declared twice")]
    DuplicateCategory(String),

    #[error("Entry in category '{category}' has an empty id")]
    EmptyId { category: String },
}

/// Errors that can occur while loading match configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
