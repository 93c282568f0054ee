//! Media category and size tier enumerations.

use serde::{Deserialize, Serialize};

/// Delimiter joining the parts of a cache key.
pub const CACHE_KEY_DELIMITER: char = '-';

/// Category of a stored media object.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Image content (photos, thumbnails)
    #[display("image")]
    Image,
    /// Video content, fetched through the chunked path
    #[display("video")]
    Video,
    /// Generic document content
    #[display("document")]
    Document,
}

impl MediaCategory {
    /// Stable string form used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Document => "document",
        }
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaCategory::Image),
            "video" => Ok(MediaCategory::Video),
            "document" => Ok(MediaCategory::Document),
            _ => Err(format!("Unknown media category: {}", s)),
        }
    }
}

/// Size tier of a cached media object.
///
/// A large entry satisfies any display need; a small entry is a
/// thumbnail-resolution placeholder.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    /// Thumbnail/preview resolution
    #[display("small")]
    Small,
    /// Full resolution
    #[display("large")]
    Large,
}

impl SizeTier {
    /// Stable string form used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Large => "large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn category_round_trips_through_str() {
        for category in MediaCategory::iter() {
            assert_eq!(MediaCategory::from_str(category.as_str()), Ok(category));
        }
        assert!(MediaCategory::from_str("audio").is_err());
    }

    #[test]
    fn tier_display_matches_cache_key_literals() {
        assert_eq!(SizeTier::Small.to_string(), "small");
        assert_eq!(SizeTier::Large.to_string(), "large");
    }
}
