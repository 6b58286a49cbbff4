//! Airport lookup
//!
//! Resolves the free text a user types into the flights form ("paris",
//! "JFK", "Heathrow", "New York (LGA)") to a 3-letter IATA code, and
//! provides ranked suggestions for the form's autocomplete.

mod data;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// A single airport from the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

impl Airport {
    /// Label in the format the UI shows and `resolve` understands
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.city, self.name, self.code)
    }
}

static TABLE: Lazy<Vec<Airport>> = Lazy::new(|| {
    data::AIRPORTS
        .iter()
        .map(|&(code, name, city, country)| Airport {
            code,
            name,
            city,
            country,
        })
        .collect()
});

static BY_CODE: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    TABLE
        .iter()
        .enumerate()
        .map(|(idx, airport)| (airport.code, idx))
        .collect()
});

static TRAILING_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*([A-Za-z]{3})\s*\)\s*$").expect("valid regex"));

/// All known airports
pub fn all() -> &'static [Airport] {
    &TABLE
}

/// Look up an airport by its IATA code (case-insensitive)
pub fn lookup(code: &str) -> Option<&'static Airport> {
    let code = code.trim().to_ascii_uppercase();
    BY_CODE.get(code.as_str()).map(|&idx| &TABLE[idx])
}

/// Resolve free text to a 3-letter IATA code.
///
/// Returns `None` when the input matches nothing and is not itself
/// shaped like a code.
pub fn resolve(input: &str) -> Option<String> {
    let input = normalize(input);
    if input.is_empty() {
        return None;
    }

    if let Some(cap) = TRAILING_CODE.captures(&input) {
        return Some(cap[1].to_ascii_uppercase());
    }

    if let Some(airport) = lookup(&input) {
        return Some(airport.code.to_string());
    }

    let needle = input.to_lowercase();

    let exact = TABLE
        .iter()
        .find(|a| a.city.to_lowercase() == needle)
        .or_else(|| TABLE.iter().find(|a| a.name.to_lowercase() == needle));
    if let Some(airport) = exact {
        return Some(airport.code.to_string());
    }

    // Airports missing from the table can still be given by code
    if input.len() == 3 && input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(input.to_ascii_uppercase());
    }

    // Partial matches on one or two letters are too ambiguous to trust
    if needle.chars().count() < 3 {
        return None;
    }

    let partial = TABLE
        .iter()
        .find(|a| {
            a.city.to_lowercase().starts_with(&needle) || a.name.to_lowercase().starts_with(&needle)
        })
        .or_else(|| {
            TABLE.iter().find(|a| {
                a.city.to_lowercase().contains(&needle) || a.name.to_lowercase().contains(&needle)
            })
        });
    partial.map(|airport| airport.code.to_string())
}

/// Ranked airport suggestions for a partially typed name, city or code
pub fn suggest(prefix: &str, limit: usize) -> Vec<&'static Airport> {
    let needle = normalize(prefix).to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(u8, usize, &'static Airport)> = TABLE
        .iter()
        .enumerate()
        .filter_map(|(idx, airport)| {
            let city = airport.city.to_lowercase();
            let name = airport.name.to_lowercase();
            let rank = if airport.code.eq_ignore_ascii_case(&needle) {
                0
            } else if city.starts_with(&needle) {
                1
            } else if name.starts_with(&needle) {
                2
            } else if city.contains(&needle)
                || name.contains(&needle)
                || airport.country.to_lowercase().starts_with(&needle)
            {
                3
            } else {
                return None;
            };
            Some((rank, idx, airport))
        })
        .collect();

    ranked.sort_by_key(|&(rank, idx, _)| (rank, idx));
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, _, airport)| airport)
        .collect()
}

fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(BY_CODE.len(), all().len());
        assert!(all().iter().all(|a| a.code.len() == 3));
    }

    #[test]
    fn test_resolve_code() {
        assert_eq!(resolve("JFK").as_deref(), Some("JFK"));
        assert_eq!(resolve(" lax ").as_deref(), Some("LAX"));
    }

    #[test]
    fn test_resolve_city_prefers_primary_airport() {
        assert_eq!(resolve("Paris").as_deref(), Some("CDG"));
        assert_eq!(resolve("new york").as_deref(), Some("JFK"));
        assert_eq!(resolve("London").as_deref(), Some("LHR"));
    }

    #[test]
    fn test_resolve_airport_name() {
        assert_eq!(resolve("Heathrow").as_deref(), Some("LHR"));
        assert_eq!(resolve("gatwick airport").as_deref(), Some("LGW"));
        assert_eq!(resolve("Charles de Gaulle Airport").as_deref(), Some("CDG"));
    }

    #[test]
    fn test_resolve_suggestion_label() {
        assert_eq!(resolve("New York - LaGuardia Airport (LGA)").as_deref(), Some("LGA"));
        let label = lookup("sfo").unwrap().label();
        assert_eq!(resolve(&label).as_deref(), Some("SFO"));
    }

    #[test]
    fn test_resolve_unknown_code_shape() {
        // Not in the table, but shaped like an IATA code
        assert_eq!(resolve("xqz").as_deref(), Some("XQZ"));
    }

    #[test]
    fn test_resolve_unlisted_code_beats_partial_match() {
        // Cork is not in the table; "ork" must not fall through to "New York"
        assert!(lookup("ORK").is_none());
        assert_eq!(resolve("ORK").as_deref(), Some("ORK"));
        assert_eq!(resolve("ork").as_deref(), Some("ORK"));
        // Longer partial names still resolve through the table
        assert_eq!(resolve("Heath").as_deref(), Some("LHR"));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(resolve("Atlantis Spaceport 9"), None);
        assert_eq!(resolve("ab"), None);
    }

    #[test]
    fn test_suggest_ranking() {
        let results = suggest("lon", 5);
        assert!(!results.is_empty());
        assert!(results.iter().all(|a| a.city == "London"));
        assert_eq!(results[0].code, "LHR");

        let by_code = suggest("dub", 3);
        assert_eq!(by_code[0].code, "DUB");
    }

    #[test]
    fn test_suggest_limits() {
        assert!(suggest("", 5).is_empty());
        assert!(suggest("a", 0).is_empty());
        assert_eq!(suggest("a", 4).len(), 4);
    }
}
