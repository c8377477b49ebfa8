//! NSE universe catalog and CSV source resolution.
//!
//! Each universe maps to a fixed remote CSV file. Selection is constrained
//! to the enumerated set, so resolution has no error path.

use serde::{Deserialize, Serialize};
use std::fmt;

const SOURCE_BASE_URL: &str =
    "https://raw.githubusercontent.com/prayan2702/Industry_Data/refs/heads/main";

/// Selectable NSE index universes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NseUniverse {
    /// Nifty 50
    Nifty50,

    /// Nifty 100
    Nifty100,

    /// Nifty 200
    Nifty200,

    /// Nifty 250 (large + mid cap)
    Nifty250,

    /// Nifty 500
    Nifty500,

    /// Nifty Total Market (750)
    N750,

    /// All NSE-listed equities
    AllNse,
}

impl NseUniverse {
    /// Returns all universes in selector order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Nifty50,
            Self::Nifty100,
            Self::Nifty200,
            Self::Nifty250,
            Self::Nifty500,
            Self::N750,
            Self::AllNse,
        ]
    }

    /// The universe's display label, as used in export filenames.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nifty50 => "Nifty50",
            Self::Nifty100 => "Nifty100",
            Self::Nifty200 => "Nifty200",
            Self::Nifty250 => "Nifty250",
            Self::Nifty500 => "Nifty500",
            Self::N750 => "N750",
            Self::AllNse => "AllNSE",
        }
    }

    /// The URL of the universe's membership CSV.
    pub fn source_url(&self) -> String {
        match self {
            Self::N750 => format!("{SOURCE_BASE_URL}/ind_niftytotalmarket_list.csv"),
            Self::AllNse => format!("{SOURCE_BASE_URL}/NSE_EQ_ALL.csv"),
            _ => format!(
                "{SOURCE_BASE_URL}/ind_{}list.csv",
                self.label().to_lowercase()
            ),
        }
    }
}

impl Default for NseUniverse {
    fn default() -> Self {
        Self::AllNse
    }
}

impl fmt::Display for NseUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a user-supplied universe name, case-insensitively.
pub fn parse_universe(name: &str) -> Option<NseUniverse> {
    let normalized = name.to_lowercase();

    let universe = match normalized.as_str() {
        "nifty50" => NseUniverse::Nifty50,
        "nifty100" => NseUniverse::Nifty100,
        "nifty200" => NseUniverse::Nifty200,
        "nifty250" => NseUniverse::Nifty250,
        "nifty500" => NseUniverse::Nifty500,
        "n750" | "niftytotalmarket" => NseUniverse::N750,
        "allnse" | "all" => NseUniverse::AllNse,
        _ => return None,
    };

    Some(universe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NseUniverse::Nifty50, "ind_nifty50list.csv")]
    #[case(NseUniverse::Nifty100, "ind_nifty100list.csv")]
    #[case(NseUniverse::Nifty200, "ind_nifty200list.csv")]
    #[case(NseUniverse::Nifty250, "ind_nifty250list.csv")]
    #[case(NseUniverse::Nifty500, "ind_nifty500list.csv")]
    #[case(NseUniverse::N750, "ind_niftytotalmarket_list.csv")]
    #[case(NseUniverse::AllNse, "NSE_EQ_ALL.csv")]
    fn test_source_url(#[case] universe: NseUniverse, #[case] file: &str) {
        let url = universe.source_url();
        assert!(url.starts_with("https://"));
        assert!(url.ends_with(file), "{url}");
        assert!(!url.contains('{') && !url.contains('}'));
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for universe in NseUniverse::all() {
            assert_eq!(parse_universe(universe.label()), Some(universe));
            assert_eq!(parse_universe(&universe.label().to_uppercase()), Some(universe));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_universe("Sensex"), None);
        assert_eq!(parse_universe(""), None);
    }

    #[test]
    fn test_default_is_all_nse() {
        assert_eq!(NseUniverse::default(), NseUniverse::AllNse);
        assert_eq!(NseUniverse::default().label(), "AllNSE");
    }

    #[test]
    fn test_selector_order() {
        let all = NseUniverse::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all.first(), Some(&NseUniverse::Nifty50));
        assert_eq!(all.last(), Some(&NseUniverse::AllNse));
    }
}
