//! Decoding of search response payloads.
//!
//! The payload comes from a remote service, so nothing here trusts its shape.
//! A document that is not a JSON object with a `results` array fails as a
//! whole; inside the array each record stands alone and bad records are
//! skipped.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::content::SearchResult;
use super::error::ParseError;

pub fn parse(payload: &[u8]) -> Result<Vec<SearchResult>, ParseError> {
    let document: Value = serde_json::from_slice(payload)
        .map_err(|e| ParseError::MalformedPayload(e.to_string()))?;

    let records = document
        .as_object()
        .ok_or_else(|| ParseError::MalformedPayload("top level is not an object".to_string()))?
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::MalformedPayload("missing `results` array".to_string()))?;

    let mut results = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match record.as_object().and_then(parse_record) {
            Some(result) => results.push(result),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = results.len(), "Skipped unusable search records");
    }

    Ok(results)
}

fn parse_record(record: &Map<String, Value>) -> Option<SearchResult> {
    let name = first_string(record, &["trackName", "collectionName", "name"])?;

    let genre = first_string(record, &["primaryGenreName", "genre"]).unwrap_or_else(|| {
        record
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    });

    Some(SearchResult {
        name,
        artist_name: string_field(record, "artistName"),
        kind: string_field(record, "kind"),
        genre,
        price: first_decimal(record, &["price", "trackPrice", "collectionPrice"]).unwrap_or_default(),
        currency_code: first_string(record, &["currency", "currencyCode"]).unwrap_or_default(),
        thumbnail_url: string_field(record, "artworkUrl60"),
        full_image_url: string_field(record, "artworkUrl100"),
        store_url: first_string(record, &["trackViewUrl", "collectionViewUrl"]).unwrap_or_default(),
    })
}

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    first_string(record, &[key]).unwrap_or_default()
}

/// First of `keys` holding a non-blank string. Blank strings count as missing.
fn first_string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| {
            record
                .get(*key)
                .and_then(Value::as_str)
                .filter(|text| !text.trim().is_empty())
        })
        .map(str::to_string)
}

fn first_decimal(record: &Map<String, Value>, keys: &[&str]) -> Option<Decimal> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Number(number) => Decimal::from_str(&number.to_string())
            .or_else(|_| Decimal::from_scientific(&number.to_string()))
            .ok(),
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_fields() {
        let payload = br#"{
            "resultCount": 1,
            "results": [{
                "wrapperType": "track",
                "kind": "song",
                "artistName": "Pink Floyd",
                "trackName": "Time",
                "collectionName": "The Dark Side of the Moon",
                "primaryGenreName": "Rock",
                "trackPrice": 1.29,
                "currency": "USD",
                "artworkUrl60": "https://img.test/60.jpg",
                "artworkUrl100": "https://img.test/100.jpg",
                "trackViewUrl": "https://store.test/time"
            }]
        }"#;

        let results = parse(payload).unwrap();
        assert_eq!(results.len(), 1);
        let time = &results[0];
        assert_eq!(time.name, "Time");
        assert_eq!(time.artist_name, "Pink Floyd");
        assert_eq!(time.kind, "song");
        assert_eq!(time.genre, "Rock");
        assert_eq!(time.price, Decimal::new(129, 2));
        assert_eq!(time.currency_code, "USD");
        assert_eq!(time.thumbnail_url, "https://img.test/60.jpg");
        assert_eq!(time.full_image_url, "https://img.test/100.jpg");
        assert_eq!(time.store_url, "https://store.test/time");
    }

    #[test]
    fn accepts_plain_field_names() {
        let payload = br#"{"results": [{"name": "Apple", "kind": "ebook", "genre": "Fiction",
            "price": "4.99", "currencyCode": "EUR"}]}"#;
        let results = parse(payload).unwrap();
        assert_eq!(results[0].name, "Apple");
        assert_eq!(results[0].genre, "Fiction");
        assert_eq!(results[0].price, Decimal::new(499, 2));
        assert_eq!(results[0].currency_code, "EUR");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let payload = br#"{"results": [{"trackName": "Solo"}]}"#;
        let results = parse(payload).unwrap();
        assert_eq!(results[0].artist_name, "");
        assert_eq!(results[0].genre, "");
        assert_eq!(results[0].price, Decimal::ZERO);
    }

    #[test]
    fn genres_array_is_joined() {
        let payload = br#"{"results": [{"trackName": "App", "genres": ["Games", "Puzzle"]}]}"#;
        assert_eq!(parse(payload).unwrap()[0].genre, "Games, Puzzle");
    }

    #[test]
    fn records_without_a_name_are_skipped() {
        let payload = br#"{"results": [
            {"artistName": "Nobody"},
            {"trackName": "   "},
            {"trackName": 42},
            "not an object",
            {"trackName": "Kept"}
        ]}"#;
        let results = parse(payload).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Kept");
    }

    #[test]
    fn blank_name_falls_back_to_next_key() {
        let payload = br#"{"results": [{"trackName": " ", "collectionName": "Abbey Road"}]}"#;
        let results = parse(payload).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Abbey Road");
    }

    #[test]
    fn wrongly_typed_optional_fields_count_as_missing() {
        let payload = br#"{"results": [{"trackName": "X", "artistName": 7, "price": {"v": 1}}]}"#;
        let results = parse(payload).unwrap();
        assert_eq!(results[0].artist_name, "");
        assert_eq!(results[0].price, Decimal::ZERO);
    }

    #[test]
    fn empty_results_is_not_an_error() {
        assert!(parse(br#"{"results": []}"#).unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_shapes() {
        let payloads: [&[u8]; 6] = [
            b"",
            b"not json",
            b"[1, 2, 3]",
            br#"{"resultCount": 0}"#,
            br#"{"results": {"trackName": "x"}}"#,
            &[0xff, 0xfe, 0x00, 0x7b],
        ];
        for payload in payloads {
            assert!(matches!(parse(payload), Err(ParseError::MalformedPayload(_))));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_bytes_parse_or_fail_cleanly(payload in any::<Vec<u8>>()) {
            match parse(&payload) {
                Ok(_) | Err(ParseError::MalformedPayload(_)) => {}
            }
        }

        #[test]
        fn any_json_results_array_never_panics(
            names in prop::collection::vec(prop::option::of(".*"), 0..8),
        ) {
            let records: Vec<Value> = names
                .iter()
                .map(|name| match name {
                    Some(name) => serde_json::json!({ "trackName": name, "price": name }),
                    None => Value::Null,
                })
                .collect();
            let payload = serde_json::json!({ "results": records }).to_string();
            let results = parse(payload.as_bytes()).unwrap();
            prop_assert!(results.len() <= names.len());
            prop_assert!(results.iter().all(|r| !r.name.trim().is_empty()));
        }

        #[test]
        fn missing_artist_is_always_empty(name in "[^\\s]{1,24}", genre in ".{0,12}") {
            let payload = serde_json::json!({
                "results": [{ "trackName": name, "primaryGenreName": genre }]
            })
            .to_string();
            let results = parse(payload.as_bytes()).unwrap();
            prop_assert_eq!(results.len(), 1);
            prop_assert_eq!(results[0].artist_name.as_str(), "");
        }
    }
}
