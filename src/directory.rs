//! City directory and search filter
//!
//! The directory is a fixed ordered list of Sri Lankan place names. The
//! filter is a plain case-insensitive substring match preserving directory
//! order; no ranking, fuzzy matching, or de-duplication.

/// The fixed ordered city directory
pub const SRI_LANKAN_CITIES: [&str; 28] = [
    "Colombo",
    "Kandy",
    "Galle",
    "Jaffna",
    "Negombo",
    "Trincomalee",
    "Batticaloa",
    "Matara",
    "Ratnapura",
    "Badulla",
    "Kurunegala",
    "Anuradhapura",
    "Polonnaruwa",
    "Hambantota",
    "Vavuniya",
    "Mannar",
    "Nuwara Eliya",
    "Ella",
    "Sigiriya",
    "Bentota",
    "Kalutara",
    "Puttalam",
    "Mullaitivu",
    "Kilinochchi",
    "Ampara",
    "Monaragala",
    "Kegalle",
    "Gampaha",
];

/// Cities pinned to the quick-select strip on the page
pub const POPULAR_CITIES: [&str; 6] =
    ["Colombo", "Kandy", "Galle", "Negombo", "Nuwara Eliya", "Jaffna"];

/// City selected when the page first loads
pub const DEFAULT_CITY: &str = "Colombo";

/// Return the ordered subsequence of directory names whose lowercase form
/// contains the lowercase query. An empty query returns the full directory;
/// whether to show the list for an empty search box is the view's concern.
#[must_use]
pub fn filter(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    SRI_LANKAN_CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}

/// Exact-name membership test, used to validate incoming selections
#[must_use]
pub fn contains(name: &str) -> bool {
    SRI_LANKAN_CITIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_query_returns_full_directory() {
        assert_eq!(filter(""), SRI_LANKAN_CITIES.to_vec());
    }

    #[rstest]
    #[case("gam", &["Gampaha"])]
    #[case("Kand", &["Kandy"])]
    #[case("nuwara", &["Nuwara Eliya"])]
    #[case("zzz", &[])]
    fn test_filter_matches(#[case] query: &str, #[case] expected: &[&str]) {
        assert_eq!(filter(query), expected);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(filter("COLOMBO"), vec!["Colombo"]);
        assert_eq!(filter("colombo"), vec!["Colombo"]);
    }

    #[test]
    fn test_gam_excludes_colombo() {
        let results = filter("gam");
        assert!(results.contains(&"Gampaha"));
        assert!(!results.contains(&"Colombo"));
    }

    #[test]
    fn test_filter_preserves_directory_order() {
        // "a" matches most of the directory; the result must be an
        // order-preserving subsequence.
        let results = filter("a");
        let mut cursor = 0;
        for city in &results {
            let position = SRI_LANKAN_CITIES[cursor..]
                .iter()
                .position(|c| c == city)
                .expect("filter result not present in directory order");
            cursor += position + 1;
        }
        for city in &results {
            assert!(city.to_lowercase().contains('a'));
        }
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(contains("Colombo"));
        assert!(contains("Nuwara Eliya"));
        assert!(!contains("colombo"));
        assert!(!contains("London"));
    }

    #[test]
    fn test_popular_cities_are_in_directory() {
        for city in POPULAR_CITIES {
            assert!(contains(city), "{city} missing from directory");
        }
        assert!(contains(DEFAULT_CITY));
    }
}
