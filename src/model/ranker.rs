//! Display ordering for search results

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::content::SearchResult;

/// Order results by name, ignoring case and accents.
///
/// "Éclair" sorts with the other E names rather than after "zebra". The sort
/// is stable, so results whose names compare equal keep the order
/// the server sent them in. The output depends only on the input sequence.
pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_by_cached_key(|result| sort_key(&result.name));
    results
}

/// Decompose, drop combining marks, then lowercase.
fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::sample;

    fn names(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_case_insensitively() {
        let ranked = rank(vec![sample("zebra"), sample("Apple"), sample("banana"), sample("Cherry")]);
        assert_eq!(names(&ranked), ["Apple", "banana", "Cherry", "zebra"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let ranked = rank(vec![sample("zebra"), sample("Éclair"), sample("Eagle")]);
        assert_eq!(names(&ranked), ["Eagle", "Éclair", "zebra"]);

        let ranked = rank(vec![sample("Ölfarbe"), sample("Nacht"), sample("Pferd"), sample("ñandú")]);
        assert_eq!(names(&ranked), ["Nacht", "ñandú", "Ölfarbe", "Pferd"]);
    }

    #[test]
    fn ties_keep_payload_order() {
        let mut first = sample("Echo");
        first.artist_name = "first".to_string();
        let mut second = sample("echo");
        second.artist_name = "second".to_string();
        let mut third = sample("ECHO");
        third.artist_name = "third".to_string();

        let ranked = rank(vec![sample("Zulu"), first, second, third, sample("Alpha")]);
        let artists: Vec<_> = ranked.iter().map(|r| r.artist_name.as_str()).collect();
        assert_eq!(artists, ["", "first", "second", "third", ""]);
    }

    #[test]
    fn ordered_and_idempotent() {
        let input = vec![
            sample("Mango"),
            sample("apple pie"),
            sample("Apple"),
            sample("ÉCLAIR"),
            sample("éclair"),
            sample("10 Songs"),
            sample("2 Songs"),
            sample("kiwi"),
        ];
        let once = rank(input);
        for pair in once.windows(2) {
            assert!(sort_key(&pair[0].name) <= sort_key(&pair[1].name));
        }
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }
}
