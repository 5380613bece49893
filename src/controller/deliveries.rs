//! Applying finished fetches on the UI loop.
//!
//! Fetch tasks never touch the model. They send deliveries that are drained
//! here, one at a time, between frames.

use tokio::sync::mpsc::error::TryRecvError;

use super::AppController;

impl AppController {
    /// Apply everything that arrived since the last frame.
    ///
    /// Returns whether anything visible changed.
    pub fn pump_deliveries(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.search_deliveries.try_recv() {
                Ok(delivery) => {
                    if self.model.search.handle_delivery(delivery) {
                        self.model.on_search_state_changed();
                        changed = true;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Search delivery channel closed");
                    break;
                }
            }
        }

        while let Ok(delivery) = self.artwork_deliveries.try_recv() {
            changed |= self.model.artwork.handle_delivery(delivery);
        }

        while let Ok(notice) = self.notices_rx.try_recv() {
            let message = Self::format_notice(notice);
            self.model.set_error(message);
            changed = true;
        }

        changed
    }
}
