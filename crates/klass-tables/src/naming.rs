//! Short column-name generation for joined tables.

/// Derives a short snake_case name from a display name.
///
/// The name is lowercased, the Norwegian letters transliterated
/// (ae/oe/aa), everything but ASCII alphanumerics and whitespace is
/// stripped, and the connector words "og" and "and" are dropped as
/// whole tokens. The first `word_count` remaining tokens are joined
/// with underscores.
pub fn short_name(name: &str, word_count: usize) -> String {
    let lowered = name.to_lowercase();
    let transliterated: String = lowered
        .chars()
        .flat_map(|c| match c {
            'æ' => vec!['a', 'e'],
            'ø' => vec!['o', 'e'],
            'å' => vec!['a', 'a'],
            c if c.is_ascii_alphanumeric() || c.is_whitespace() => vec![c],
            _ => Vec::new(),
        })
        .collect();
    transliterated
        .split_whitespace()
        .filter(|token| *token != "og" && *token != "and")
        .take(word_count)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_words() {
        assert_eq!(short_name("Binary Gender Grouping", 2), "binary_gender");
        assert_eq!(short_name("Binary Gender Grouping", 3), "binary_gender_grouping");
    }

    #[test]
    fn norwegian_letters_are_transliterated() {
        assert_eq!(short_name("Næring på øverste nivå", 3), "naering_paa_oeverste");
    }

    #[test]
    fn connector_words_are_dropped() {
        assert_eq!(short_name("Bygg og anlegg", 2), "bygg_anlegg");
        assert_eq!(short_name("Oil and Gas", 2), "oil_gas");
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(short_name("Varer, unntatt mat", 3), "varer_unntatt_mat");
    }

    #[test]
    fn asks_for_more_words_than_exist() {
        assert_eq!(short_name("Kjønn", 5), "kjoenn");
    }
}
