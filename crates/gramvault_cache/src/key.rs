//! Cache key derivation.

use gramvault_core::{MediaCategory, SizeTier, CACHE_KEY_DELIMITER};

/// The small/large key pair for one media reference.
///
/// Derivation is pure and deterministic so entries survive reloads:
/// identical inputs always produce identical keys.
///
/// # Examples
///
/// ```
/// use gramvault_cache::CacheKeyPair;
/// use gramvault_core::MediaCategory;
///
/// let keys = CacheKeyPair::derive("12345", 42, MediaCategory::Image);
/// assert_eq!(keys.small(), "12345-42-small-image");
/// assert_eq!(keys.large(), "12345-42-large-image");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKeyPair {
    small: String,
    large: String,
}

impl CacheKeyPair {
    /// Derive both tier keys for a (channel, message, category) tuple.
    pub fn derive(channel_id: &str, remote_message_id: i64, category: MediaCategory) -> Self {
        let join = |tier: SizeTier| {
            format!(
                "{c}{d}{m}{d}{t}{d}{cat}",
                c = channel_id,
                m = remote_message_id,
                t = tier.as_str(),
                cat = category.as_str(),
                d = CACHE_KEY_DELIMITER,
            )
        };
        Self {
            small: join(SizeTier::Small),
            large: join(SizeTier::Large),
        }
    }

    /// Key for the thumbnail tier.
    pub fn small(&self) -> &str {
        &self.small
    }

    /// Key for the full-resolution tier.
    pub fn large(&self) -> &str {
        &self.large
    }

    /// Key for the given tier.
    pub fn for_tier(&self, tier: SizeTier) -> &str {
        match tier {
            SizeTier::Small => self.small(),
            SizeTier::Large => self.large(),
        }
    }
}
