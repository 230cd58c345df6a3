//! Free-text address cleanup.
//!
//! FuelCheck addresses arrive with inconsistent casing, doubled commas and
//! abbreviated road types ("365 garfield rd,,  west botany nsw 2019").
//! [`normalize_address`] turns them into a consistent display form
//! ("365 Garfield Road, West Botany NSW 2019").

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Australian state and territory abbreviations, always upper-cased.
const STATE_ABBREVIATIONS: &[&str] = &["nsw", "act", "qld", "wa", "sa", "nt", "tas", "vic"];

/// Road-type abbreviations and their expansions.
///
/// `cnr` is expanded in the same pass so every expansion is subject to the
/// same word-level capitalization.
const ROAD_ABBREVIATIONS: &[(&str, &str)] = &[
    ("rd", "road"),
    ("st", "street"),
    ("ave", "avenue"),
    ("av", "avenue"),
    ("dr", "drive"),
    ("ct", "court"),
    ("pl", "place"),
    ("ln", "lane"),
    ("way", "way"),
    ("hwy", "highway"),
    ("hw", "highway"),
    ("cres", "crescent"),
    ("cl", "close"),
    ("pde", "parade"),
    ("sq", "square"),
    ("terr", "terrace"),
    ("bvd", "boulevard"),
    ("cir", "circle"),
    ("gr", "grove"),
    ("hill", "hill"),
    ("cnr", "corner"),
];

static COMMA_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(?:\s*,)+").expect("valid comma run regex"));
static FIRST_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid comma regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static ABBREVIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ROAD_ABBREVIATIONS
        .iter()
        .map(|(abbr, _)| *abbr)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid abbreviation regex")
});

/// Normalize a free-text address for display.
///
/// Returns an empty string for empty input. Re-normalizing an already
/// normalized address yields the same string.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::normalize_address;
///
/// assert_eq!(
///     normalize_address("123 test st,,sydney nsw 2000"),
///     "123 Test Street, Sydney NSW 2000"
/// );
/// assert_eq!(normalize_address(""), "");
/// ```
pub fn normalize_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let collapsed = COMMA_RUN_RE.replace_all(address, ",");
    let separated = FIRST_COMMA_RE.replace(&collapsed, ", ");
    let spaced = WHITESPACE_RE.replace_all(&separated, " ");

    apply_capitalization(spaced.trim())
}

/// Lower-case, expand abbreviations, then title-case word by word.
fn apply_capitalization(text: &str) -> String {
    let lower = text.to_lowercase();
    let expanded = ABBREVIATION_RE.replace_all(&lower, |caps: &Captures<'_>| {
        let matched = caps[0].to_lowercase();
        ROAD_ABBREVIATIONS
            .iter()
            .find(|(abbr, _)| *abbr == matched.as_str())
            .map_or(matched, |(_, full)| (*full).to_string())
    });

    expanded
        .split(' ')
        .map(|word| {
            if is_state_abbreviation(word) {
                word.to_uppercase()
            } else {
                title_case_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_state_abbreviation(word: &str) -> bool {
    STATE_ABBREVIATIONS
        .iter()
        .any(|state| state.eq_ignore_ascii_case(word))
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_state_abbreviations() {
        assert_eq!(
            normalize_address("123 test st, sydney nsw 2000"),
            "123 Test Street, Sydney NSW 2000"
        );
        assert_eq!(normalize_address("1 main rd, perth wa 6000"), "1 Main Road, Perth WA 6000");
    }

    #[test]
    fn expands_road_abbreviations() {
        assert_eq!(
            normalize_address("123 test rd, sydney NSW 2000"),
            "123 Test Road, Sydney NSW 2000"
        );
        assert_eq!(
            normalize_address("123 main hw, test suburb NSW 2000"),
            "123 Main Highway, Test Suburb NSW 2000"
        );
        assert_eq!(
            normalize_address("9 ocean pde, the entrance nsw 2261"),
            "9 Ocean Parade, The Entrance NSW 2261"
        );
        assert_eq!(
            normalize_address("4 kent cres, dubbo nsw 2830"),
            "4 Kent Crescent, Dubbo NSW 2830"
        );
    }

    #[test]
    fn abbreviations_only_match_whole_words() {
        // "highway" contains "hw" and "way"; "1st" contains "st"
        assert_eq!(
            normalize_address("155-157 princes highway, ulladulla nsw 2539"),
            "155-157 Princes Highway, Ulladulla NSW 2539"
        );
        assert_eq!(
            normalize_address("1st avenue, sydney nsw 2000"),
            "1st Avenue, Sydney NSW 2000"
        );
    }

    #[test]
    fn leaves_direction_letters_as_words() {
        assert_eq!(
            normalize_address("n test st, sydney NSW 2000"),
            "N Test Street, Sydney NSW 2000"
        );
        assert_eq!(
            normalize_address("123 nw main st, sydney NSW 2000"),
            "123 Nw Main Street, Sydney NSW 2000"
        );
    }

    #[test]
    fn title_cases_shouting_input() {
        assert_eq!(
            normalize_address("UPPERCASE ST, LOWERCASE NSW 2000"),
            "Uppercase Street, Lowercase NSW 2000"
        );
        assert_eq!(
            normalize_address("123 MAIN st, SYDNEY nsw 2000"),
            "123 Main Street, Sydney NSW 2000"
        );
    }

    #[test]
    fn expands_corner() {
        assert_eq!(
            normalize_address("123 test st cnr main rd, sydney NSW 2000"),
            "123 Test Street Corner Main Road, Sydney NSW 2000"
        );
        assert_eq!(
            normalize_address("CNR princes hwy & croobyar rd, milton nsw 2538"),
            "Corner Princes Highway & Croobyar Road, Milton NSW 2538"
        );
    }

    #[test]
    fn standardizes_comma_spacing() {
        for input in [
            "123 test st,  sydney NSW 2000",
            "123 test st,,sydney NSW 2000",
            "123 test st,,,sydney NSW 2000",
            "123 test st,, ,sydney NSW 2000",
            "123 test st , sydney NSW 2000",
        ] {
            assert_eq!(normalize_address(input), "123 Test Street, Sydney NSW 2000", "{input}");
        }
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize_address("  123  test    st,   sydney   NSW    2000 "),
            "123 Test Street, Sydney NSW 2000"
        );
    }

    #[test]
    fn keeps_ampersand() {
        assert_eq!(
            normalize_address("123 main st & high st, sydney NSW 2000"),
            "123 Main Street & High Street, Sydney NSW 2000"
        );
    }

    #[test]
    fn handles_degenerate_input() {
        assert_eq!(normalize_address(""), "");
        assert_eq!(normalize_address("sydney"), "Sydney");
        assert_eq!(normalize_address("123"), "123");
        assert_eq!(normalize_address("   "), "");
    }

    #[test]
    fn title_case_word_lowers_the_tail() {
        assert_eq!(title_case_word("bOTANY"), "Botany");
        assert_eq!(title_case_word("(members"), "(members");
        assert_eq!(title_case_word(""), "");
    }
}
