//! Typo-tolerant, category-grouped search over a static tool catalog.
//!
//! A few hundred entries, a query that changes on every keystroke, and two
//! surfaces that want different amounts of forgiveness: a command-style
//! overlay and a sidebar filter. Both get a deterministic, category-ordered
//! result from one in-memory pass over the catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│   matcher/       │────▶│  search.rs  │
//! │ (Catalog,   │     │ (TieredMatcher,  │     │ (search,    │
//! │  SearchText)│     │  Subsequence...) │     │  MatchResult│
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!        │                   │                        │
//!        ▼                   ▼                        ▼
//!  catalog.rs (JSON)   fuzzy/ (edit distance,   session.rs (per-surface
//!                      similarity)              query state, ShellState)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use toolscout::{search, Catalog, MatchConfig, TieredMatcher};
//!
//! let catalog = Catalog::load("data/catalog.json")?;
//! let matcher = TieredMatcher::new(MatchConfig::default());
//!
//! for group in search(&catalog, &matcher, "compsotos").groups() {
//!     println!("{}: {}", group.label, group.entries.len());
//! }
//! ```

// Module declarations
mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod matcher;
mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::MatchConfig;
pub use error::{CatalogError, ConfigError};
pub use fuzzy::{edit_distance, edit_distance_within, is_similar, similarity};
pub use matcher::{Matcher, SubsequenceMatcher, Tier, TieredMatcher};
pub use search::{all_entries, search, search_query};
pub use session::{QueryState, SearchSession, ShellState, Surface};
pub use types::{
    Catalog, CatalogBuilder, CatalogEntry, Category, CategoryMatches, MatchResult, Query,
    SearchText,
};
pub use utils::normalize;
