//! Location label extraction.
//!
//! Station names are free text ("Metro West Botany North", "Costco Marsden
//! Park (Members only)"). The label shown to users is derived from the name
//! with the brand stripped, cross-checked against the suburb in the
//! normalized address.
//!
//! The heuristics never fail: when nothing better can be found the cleaned
//! name itself is used.

use std::sync::LazyLock;

use regex::Regex;

use super::address::title_case_word;

/// Words that mark the part of a name still belonging to the brand
/// ("Metro Petrol", "Shell Roadhouse").
const BRAND_SUFFIXES: &[&str] = &["petrol", "fuel", "service", "roadhouse", "express"];

/// Words that make a cleaned name look like a place in its own right.
const LOCATION_KEYWORDS: &[&str] = &[
    "park", "point", "beach", "centre", "center", "avenue", "street", "road", "drive", "place",
    "lane", "way", "highway", "bay", "cove", "hill", "mountain", "valley", "ridge", "heights",
    "downs", "estate", "village", "crossing", "junction", "corner",
];

const ROAD_TYPES: &[&str] = &[
    "road", "street", "avenue", "drive", "place", "lane", "way", "highway", "close", "court",
    "terrace", "grove", "hill", "circuit", "boulevard",
];

const DIRECTIONS: &[&str] = &[
    "north", "south", "east", "west", "central", "inner", "outer", "upper", "lower",
];

static COMMA_SUBURB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s*([^,]+)\s+NSW\s+\d{4}").expect("valid comma suburb regex")
});
static SPACED_SUBURB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+(?:\s+\w+)*)\s+NSW\s+\d{4}").expect("valid spaced suburb regex")
});
static PARENTHESIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*").expect("valid parentheses regex"));
static TRAILING_DIRECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(north|south|east|west)\b").expect("valid direction regex")
});

/// Derive the display location for a station.
///
/// Strips the brand from the name, combines what is left with the suburb
/// from `normalized_address`, and Pascal-cases the result.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::extract_location;
///
/// let location = extract_location(
///     "BP Ulladulla",
///     "BP",
///     "155-157 Princes Highway, Ulladulla NSW 2539",
/// );
/// assert_eq!(location, "Ulladulla");
/// ```
pub fn extract_location(raw_name: &str, brand: &str, normalized_address: &str) -> String {
    let cleaned = remove_brand_prefix(raw_name, brand);
    let combined = combine_name_and_address(cleaned, normalized_address);
    to_pascal_case(&combined)
}

/// Remove the brand from the front of a station name.
///
/// Tries the full brand first, then the brand's first word followed by one
/// of the brand suffix words. Whitespace left behind is kept; a single
/// leading `-` or `/` separator is dropped. Returns the name unchanged when
/// the brand is empty or does not match.
pub fn remove_brand_prefix<'a>(name: &'a str, brand: &str) -> &'a str {
    if brand.is_empty() {
        return name;
    }

    if let Some(rest) = strip_prefix_ignore_case(name, brand) {
        return clean_leading_separators(rest);
    }

    let brand_lower = brand.to_ascii_lowercase();
    let name_lower = name.to_ascii_lowercase();
    let first_word = brand_lower.split(' ').next().unwrap_or_default();
    let word_prefix = format!("{first_word} ");

    if !name_lower.starts_with(&word_prefix) {
        return name;
    }

    let after_brand = &name_lower[word_prefix.len()..];
    for suffix in BRAND_SUFFIXES {
        let Some(suffix_idx) = after_brand.find(suffix) else {
            continue;
        };

        let search_from = suffix_idx + suffix.len();
        let word_end = after_brand[search_from..]
            .find(' ')
            .map_or(after_brand.len(), |offset| search_from + offset);
        let cut = word_prefix.len() + word_end;

        if cut > 0 && cut < name.len() {
            if let Some(rest) = name.get(cut..) {
                return clean_leading_separators(rest);
            }
        }
        break;
    }

    name
}

/// Pick the best location label from a brand-stripped name and a
/// normalized address.
pub fn combine_name_and_address(clean_name: &str, normalized_address: &str) -> String {
    let name = strip_parenthesized(clean_name);
    let suburb = extract_suburb(normalized_address);

    if suburb.is_empty() {
        return name;
    }

    let name_lower = name.to_ascii_lowercase();
    let suburb_lower = suburb.to_ascii_lowercase();

    if let Some(idx) = name_lower.find(&suburb_lower) {
        let remaining = name.get(idx + suburb_lower.len()..).unwrap_or_default().trim();

        if let Some(caps) = TRAILING_DIRECTION_RE.captures(remaining) {
            return format!("{} {}", suburb, title_case_word(&caps[1]));
        }
        return suburb;
    }

    if seems_like_location_name(&name) {
        return name;
    }

    suburb
}

/// Extract the suburb preceding "NSW <postcode>" in a normalized address.
///
/// Returns an empty string when the address has no NSW postcode.
pub fn extract_suburb(normalized_address: &str) -> String {
    if normalized_address.is_empty() {
        return String::new();
    }

    if let Some(caps) = COMMA_SUBURB_RE.captures(normalized_address) {
        let suburb = caps[1].trim();
        if !suburb.is_empty() {
            return suburb.to_string();
        }
    }

    SPACED_SUBURB_RE
        .captures(normalized_address)
        .map(|caps| {
            let parts: Vec<&str> = caps[1].split_whitespace().collect();
            suburb_candidate(&parts)
        })
        .unwrap_or_default()
}

/// Choose a suburb from the words before "NSW <postcode>".
///
/// Uses the last word, prefixed by a direction word when one precedes it.
/// When the last word contains digits or is a road type it is still
/// returned on its own, so "123 Main Road NSW 2000" yields "Road".
fn suburb_candidate(parts: &[&str]) -> String {
    let Some(&last) = parts.last() else {
        return String::new();
    };

    let plausible = !last.chars().any(|c| c.is_ascii_digit()) && !is_road_type(last);
    if plausible && parts.len() >= 2 {
        let second_last = parts[parts.len() - 2];
        if is_direction(second_last) {
            return format!("{second_last} {last}");
        }
    }

    last.to_string()
}

fn is_direction(word: &str) -> bool {
    DIRECTIONS.iter().any(|d| d.eq_ignore_ascii_case(word))
}

fn is_road_type(word: &str) -> bool {
    ROAD_TYPES.iter().any(|r| r.eq_ignore_ascii_case(word))
}

/// Whether a name contains a place-like keyword ("Bondi Beach Service").
fn seems_like_location_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    LOCATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Lower-case, then capitalize each whitespace-delimited word.
pub fn to_pascal_case(s: &str) -> String {
    s.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

// ASCII case folding only; FuelCheck brand names are ASCII.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

fn clean_leading_separators(s: &str) -> &str {
    s.strip_prefix(['-', '/']).map_or(s, str::trim_start)
}

fn strip_parenthesized(name: &str) -> String {
    PARENTHESIZED_RE.replace_all(name, "").trim().to_string()
}
