//! Result categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The result type a search is issued against.
///
/// Each category is served by exactly one provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    #[default]
    Web,
    Images,
    Videos,
    News,
    Shopping,
    Maps,
    Books,
    Flights,
    Finance,
}

impl SearchCategory {
    /// Every category, in the order the UI shows them
    pub const ALL: [SearchCategory; 9] = [
        Self::Web,
        Self::Images,
        Self::Videos,
        Self::News,
        Self::Shopping,
        Self::Maps,
        Self::Books,
        Self::Flights,
        Self::Finance,
    ];

    /// Get the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::News => "news",
            Self::Shopping => "shopping",
            Self::Maps => "maps",
            Self::Books => "books",
            Self::Flights => "flights",
            Self::Finance => "finance",
        }
    }

    /// Human readable label for the UI tabs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "All",
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::News => "News",
            Self::Shopping => "Shopping",
            Self::Maps => "Maps",
            Self::Books => "Books",
            Self::Flights => "Flights",
            Self::Finance => "Finance",
        }
    }
}

impl FromStr for SearchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "all" => Ok(Self::Web),
            "images" | "image" => Ok(Self::Images),
            "videos" | "video" => Ok(Self::Videos),
            "news" => Ok(Self::News),
            "shopping" => Ok(Self::Shopping),
            "maps" | "map" => Ok(Self::Maps),
            "books" | "book" => Ok(Self::Books),
            "flights" | "flight" => Ok(Self::Flights),
            "finance" | "stocks" => Ok(Self::Finance),
            other => Err(other.to_string()),
        }
    }
}

impl std::fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
