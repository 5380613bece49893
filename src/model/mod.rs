//! Model module - Application state and the search core
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (category, UI state, etc.)
//! - `content`: The search result record
//! - `error`: Error types of the search core
//! - `query`: Request construction
//! - `parser`: Response payload decoding
//! - `ranker`: Result ordering
//! - `transport`: HTTP transport seam
//! - `fetcher`: Cancellable fetch handles and deliveries
//! - `search_engine`: Search lifecycle and state machine
//! - `artwork`: Artwork downloads bound to display slots
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod error;
mod query;
mod parser;
mod ranker;
mod transport;
mod fetcher;
mod search_engine;
mod artwork;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Category, DisplayMode, UiState};

pub use content::SearchResult;

pub use fetcher::CancellableFetcher;
pub use query::QueryBuilder;
pub use transport::HttpTransport;
#[cfg(test)]
pub(crate) use transport::stub as transport_stub;

pub use search_engine::{SearchDeliveries, SearchEngine, SearchState};

pub use artwork::{ArtworkDeliveries, ArtworkSlots, ArtworkState, SlotKey};

pub use app_model::{AppModel, GRID_COLUMNS, GRID_PAGE_SIZE, GRID_ROWS};
