//! Artwork downloads bound to display slots.
//!
//! Rows and tiles are reused for different results as the user scrolls or
//! pages, so each slot owns the handle of the download meant for it. Binding
//! a slot to a new URL drops the old handle, which cancels it; a download
//! that finished anyway is ignored because it no longer belongs to the slot.

use std::collections::HashMap;

use tokio::sync::mpsc;

use super::fetcher::{CancellableFetcher, Delivery, FetchHandle};

/// A reusable place on screen that shows one image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Position within the visible window of the result list
    Row(usize),
    /// Position within the current grid page
    Tile(usize),
    Detail,
}

pub type ArtworkDelivery = Delivery<SlotKey>;

pub type ArtworkDeliveries = mpsc::UnboundedReceiver<ArtworkDelivery>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Other,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            ImageFormat::Png
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            ImageFormat::Jpeg
        } else if bytes.starts_with(b"GIF8") {
            ImageFormat::Gif
        } else {
            ImageFormat::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Other => "image",
        }
    }
}

/// What the terminal knows about a downloaded image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub byte_len: usize,
    pub format: ImageFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtworkState {
    Loading,
    Ready(Artwork),
    Failed,
}

struct SlotBinding {
    url: String,
    handle: FetchHandle,
    state: ArtworkState,
}

pub struct ArtworkSlots {
    fetcher: CancellableFetcher,
    deliveries: mpsc::UnboundedSender<ArtworkDelivery>,
    slots: HashMap<SlotKey, SlotBinding>,
}

impl ArtworkSlots {
    pub fn new(fetcher: CancellableFetcher) -> (Self, ArtworkDeliveries) {
        let (deliveries, receiver) = mpsc::unbounded_channel();
        let slots = Self {
            fetcher,
            deliveries,
            slots: HashMap::new(),
        };
        (slots, receiver)
    }

    /// Point `slot` at `url`, cancelling whatever it was loading before.
    ///
    /// Rebinding to the same URL keeps the existing download or image.
    pub fn bind(&mut self, slot: SlotKey, url: &str) {
        if url.is_empty() {
            self.release(slot);
            return;
        }
        if self.slots.get(&slot).is_some_and(|binding| binding.url == url) {
            return;
        }

        let handle = self.fetcher.deliver(url, slot, self.deliveries.clone());
        tracing::trace!(?slot, fetch_id = handle.id(), url, "Artwork slot bound");

        // Replacing the binding drops, and so cancels, the previous handle.
        self.slots.insert(
            slot,
            SlotBinding {
                url: url.to_string(),
                handle,
                state: ArtworkState::Loading,
            },
        );
    }

    pub fn release(&mut self, slot: SlotKey) {
        if let Some(binding) = self.slots.remove(&slot) {
            tracing::trace!(?slot, fetch_id = binding.handle.id(), "Artwork slot released");
        }
    }

    /// Release every slot `keep` rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(&SlotKey) -> bool) {
        self.slots.retain(|slot, _| keep(slot));
    }

    pub fn release_all(&mut self) {
        if !self.slots.is_empty() {
            tracing::debug!(slots = self.slots.len(), "Releasing all artwork slots");
        }
        self.slots.clear();
    }

    pub fn state(&self, slot: SlotKey) -> Option<ArtworkState> {
        self.slots.get(&slot).map(|binding| binding.state)
    }

    /// Apply a finished download. Returns whether a slot changed.
    pub fn handle_delivery(&mut self, delivery: ArtworkDelivery) -> bool {
        let Some(binding) = self
            .slots
            .get_mut(&delivery.tag)
            .filter(|binding| delivery.belongs_to(&binding.handle))
        else {
            tracing::trace!(slot = ?delivery.tag, fetch_id = delivery.fetch_id(), "Dropped stale artwork");
            return false;
        };

        binding.state = match delivery.outcome {
            Ok(bytes) => ArtworkState::Ready(Artwork {
                byte_len: bytes.len(),
                format: ImageFormat::sniff(&bytes),
            }),
            Err(e) => {
                tracing::debug!(slot = ?delivery.tag, url = %binding.url, error = %e, "Artwork download failed");
                ArtworkState::Failed
            }
        };
        true
    }
}
