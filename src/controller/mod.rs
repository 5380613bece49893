//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and applies finished fetches.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Searching, result navigation and detail view
//! - `deliveries`: Draining search/artwork deliveries on the UI loop

mod input;
mod navigation;
mod deliveries;

use tokio::sync::mpsc;

use crate::model::{AppModel, ArtworkDeliveries, SearchDeliveries};

/// Something a finished search wants the user to know about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Notice {
    SearchFailed,
}

/// Hands a URL to the desktop's default handler.
pub(crate) type UrlOpener = Box<dyn Fn(&str) -> std::io::Result<()>>;

/// Owns the model and is driven exclusively by the UI loop.
pub struct AppController {
    pub(crate) model: AppModel,
    search_deliveries: SearchDeliveries,
    artwork_deliveries: ArtworkDeliveries,
    notices_tx: mpsc::UnboundedSender<Notice>,
    notices_rx: mpsc::UnboundedReceiver<Notice>,
    pub(crate) url_opener: UrlOpener,
}

impl AppController {
    pub fn new(
        model: AppModel,
        search_deliveries: SearchDeliveries,
        artwork_deliveries: ArtworkDeliveries,
    ) -> Self {
        let (notices_tx, notices_rx) = mpsc::unbounded_channel();
        Self {
            model,
            search_deliveries,
            artwork_deliveries,
            notices_tx,
            notices_rx,
            url_opener: Box::new(|url: &str| open::that(url)),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub(crate) fn format_notice(notice: Notice) -> String {
        match notice {
            Notice::SearchFailed => {
                "There was an error accessing the store. Please try again.".to_string()
            }
        }
    }
}
