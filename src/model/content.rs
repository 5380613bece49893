//! The search result record and its display helpers

use rust_decimal::Decimal;

/// A single catalog entry decoded from a search response.
///
/// Only the parser builds these; nothing mutates one afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub name: String,
    /// Empty when the catalog did not name an artist.
    pub artist_name: String,
    /// Raw catalog kind, e.g. `song`, `software`, `ebook`.
    pub kind: String,
    pub genre: String,
    pub price: Decimal,
    pub currency_code: String,
    pub thumbnail_url: String,
    pub full_image_url: String,
    pub store_url: String,
}

impl SearchResult {
    pub fn artist_display(&self) -> &str {
        if self.artist_name.is_empty() {
            "Unknown"
        } else {
            &self.artist_name
        }
    }

    /// Human readable label for the raw catalog kind
    pub fn kind_display(&self) -> &str {
        match self.kind.as_str() {
            "album" => "Album",
            "audiobook" => "Audio Book",
            "book" => "Book",
            "ebook" => "E-Book",
            "feature-movie" => "Movie",
            "music-video" => "Music Video",
            "podcast" => "Podcast",
            "software" => "App",
            "song" => "Song",
            "tv-episode" => "TV Episode",
            other => other,
        }
    }

    pub fn price_display(&self) -> String {
        if self.price.is_zero() {
            return "Free".to_string();
        }
        let amount = self.price.round_dp(2);
        match self.currency_code.as_str() {
            "USD" => format!("${:.2}", amount),
            "EUR" => format!("€{:.2}", amount),
            "GBP" => format!("£{:.2}", amount),
            "JPY" => format!("¥{}", amount.round()),
            "" => format!("{:.2}", amount),
            code => format!("{:.2} {}", amount, code),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(name: &str) -> SearchResult {
    SearchResult {
        name: name.to_string(),
        artist_name: String::new(),
        kind: "song".to_string(),
        genre: String::new(),
        price: Decimal::ZERO,
        currency_code: "USD".to_string(),
        thumbnail_url: format!("https://img.test/{}/60.jpg", name),
        full_image_url: format!("https://img.test/{}/100.jpg", name),
        store_url: String::new(),
    }
}
