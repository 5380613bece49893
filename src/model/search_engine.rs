//! Search request lifecycle.
//!
//! The engine owns the only mutable search state. `perform_search` and
//! `handle_delivery` are both called from the UI loop, which makes that loop
//! the single context every transition happens on. Network work runs on
//! fetcher tasks and comes back as a [`Delivery`] through the channel handed
//! out by [`SearchEngine::new`].
//!
//! Only the current handle's delivery may touch state. Starting a search
//! cancels the previous handle first, and a delivery is applied only if it
//! [`belongs_to`](Delivery::belongs_to) the handle still held, so a response
//! that raced a cancellation is dropped even if it was already queued.

use tokio::sync::mpsc;

use super::content::SearchResult;
use super::error::FetchError;
use super::fetcher::{CancellableFetcher, Delivery, FetchHandle};
use super::parser;
use super::query::QueryBuilder;
use super::ranker;
use super::types::Category;

/// Called once per search that was not cancelled: `true` when the request
/// succeeded (even with nothing found), `false` otherwise.
pub type SearchCallback = Box<dyn FnOnce(bool) + Send>;

pub type SearchDelivery = Delivery<()>;

pub type SearchDeliveries = mpsc::UnboundedReceiver<SearchDelivery>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    NotSearchedYet,
    Loading,
    NoResults,
    /// Never empty; ranked when the search completed.
    Results(Vec<SearchResult>),
}

impl SearchState {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchState::Results(list) => list,
            _ => &[],
        }
    }
}

struct PendingSearch {
    handle: FetchHandle,
    query: String,
    category: Category,
    on_complete: SearchCallback,
}

pub struct SearchEngine {
    fetcher: CancellableFetcher,
    query_builder: QueryBuilder,
    state: SearchState,
    in_flight: Option<PendingSearch>,
    deliveries: mpsc::UnboundedSender<SearchDelivery>,
}

impl SearchEngine {
    pub fn new(fetcher: CancellableFetcher, query_builder: QueryBuilder) -> (Self, SearchDeliveries) {
        let (deliveries, receiver) = mpsc::unbounded_channel();
        let engine = Self {
            fetcher,
            query_builder,
            state: SearchState::NotSearchedYet,
            in_flight: None,
            deliveries,
        };
        (engine, receiver)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a search, superseding any search still in flight.
    ///
    /// Invalid text leaves everything as it was, including a search already
    /// running, and reports `false` before returning.
    pub fn perform_search(&mut self, query_text: &str, category: Category, on_complete: SearchCallback) {
        let request = match self.query_builder.build(query_text, category) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(query = query_text, error = %e, "Search rejected");
                on_complete(false);
                return;
            }
        };

        if let Some(previous) = self.in_flight.take() {
            previous.handle.cancel();
            tracing::debug!(
                query = %previous.query,
                fetch_id = previous.handle.id(),
                "Superseded in-flight search"
            );
        }

        self.state = SearchState::Loading;

        let url = request.url();
        let handle = self.fetcher.deliver(&url, (), self.deliveries.clone());
        tracing::info!(
            query = query_text,
            category = ?category,
            fetch_id = handle.id(),
            "Search issued"
        );

        self.in_flight = Some(PendingSearch {
            handle,
            query: query_text.to_string(),
            category,
            on_complete,
        });
    }

    /// Drop the in-flight search without reporting it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.in_flight.take() {
            pending.handle.cancel();
            self.state = SearchState::NotSearchedYet;
            tracing::debug!(query = %pending.query, "Search cancelled");
        }
    }

    /// Apply a delivery received from the channel.
    ///
    /// Returns whether the state changed; stale deliveries return `false`.
    pub fn handle_delivery(&mut self, delivery: SearchDelivery) -> bool {
        if delivery.outcome.as_ref().is_err_and(FetchError::is_cancelled) {
            tracing::debug!(fetch_id = delivery.fetch_id(), "Dropped cancelled search delivery");
            return false;
        }

        let Some(pending) = self.in_flight.take_if(|pending| delivery.belongs_to(&pending.handle)) else {
            tracing::debug!(fetch_id = delivery.fetch_id(), "Dropped stale search delivery");
            return false;
        };

        let success = match delivery.outcome {
            Ok(payload) => {
                self.state = match parser::parse(&payload) {
                    Ok(results) if !results.is_empty() => {
                        tracing::info!(
                            query = %pending.query,
                            category = ?pending.category,
                            results = results.len(),
                            "Search completed"
                        );
                        SearchState::Results(ranker::rank(results))
                    }
                    Ok(_) => {
                        tracing::info!(query = %pending.query, "Search found nothing");
                        SearchState::NoResults
                    }
                    Err(e) => {
                        tracing::warn!(query = %pending.query, error = %e, "Search payload unusable");
                        SearchState::NoResults
                    }
                };
                true
            }
            Err(e) => {
                tracing::error!(query = %pending.query, error = %e, "Search failed");
                self.state = SearchState::NotSearchedYet;
                false
            }
        };

        (pending.on_complete)(success);
        true
    }
}
