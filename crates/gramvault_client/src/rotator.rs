//! Credential token rotation under flood-wait throttling.

use chrono::{DateTime, Utc};
use gramvault_core::{CredentialToken, VaultRepository};
use std::time::Duration;
use tracing::{debug, warn};

/// Select the credential token to use for a new connection attempt.
///
/// A token with no recorded cool-down always wins, in caller-supplied
/// order. Otherwise the token whose cool-down expires soonest is chosen,
/// ties broken by original order. `None` when the list is empty; the
/// caller falls back to the configured default token.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use gramvault_client::select_token;
/// use gramvault_core::CredentialToken;
///
/// let now = Utc::now();
/// let tokens = vec![
///     CredentialToken::with_cool_down("a", "s-a", now + Duration::seconds(30)),
///     CredentialToken::with_cool_down("b", "s-b", now + Duration::seconds(5)),
/// ];
/// assert_eq!(select_token(&tokens, now).unwrap().id(), "b");
/// ```
pub fn select_token(
    tokens: &[CredentialToken],
    now: DateTime<Utc>,
) -> Option<&CredentialToken> {
    if let Some(fresh) = tokens.iter().find(|token| !token.is_cooling_down()) {
        debug!(token_id = %fresh.id(), "Selected token without cool-down");
        return Some(fresh);
    }

    let soonest = tokens
        .iter()
        .filter_map(|token| token.remaining_cool_down(now).map(|left| (left, token)))
        .min_by_key(|(left, _)| *left)
        .map(|(_, token)| token);

    if let Some(token) = soonest {
        debug!(token_id = %token.id(), "All tokens cooling down, selected soonest expiry");
    }
    soonest
}

/// Persist a cool-down for a throttled token.
///
/// Awaited so ordering stays deterministic, but a persistence failure is
/// swallowed: losing the bookkeeping degrades future selection quality,
/// it must not abort the current retry.
#[tracing::instrument(skip(repo))]
pub async fn record_cool_down(repo: &dyn VaultRepository, token_id: &str, wait: Duration) {
    if let Err(e) = repo.update_token_cool_down(token_id, wait).await {
        warn!(token_id, error = %e, "Failed to record token cool-down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn token_without_cool_down_is_preferred() {
        let now = Utc::now();
        let tokens = vec![
            CredentialToken::new("a", "s-a"),
            CredentialToken::with_cool_down("b", "s-b", now + Duration::seconds(10)),
        ];
        assert_eq!(select_token(&tokens, now).unwrap().id(), "a");
    }

    #[test]
    fn first_fresh_token_wins_in_caller_order() {
        let now = Utc::now();
        let tokens = vec![
            CredentialToken::with_cool_down("a", "s-a", now + Duration::seconds(10)),
            CredentialToken::new("b", "s-b"),
            CredentialToken::new("c", "s-c"),
        ];
        assert_eq!(select_token(&tokens, now).unwrap().id(), "b");
    }

    #[test]
    fn soonest_cool_down_wins_when_all_are_throttled() {
        let now = Utc::now();
        let tokens = vec![
            CredentialToken::with_cool_down("a", "s-a", now + Duration::seconds(30)),
            CredentialToken::with_cool_down("b", "s-b", now + Duration::seconds(5)),
        ];
        assert_eq!(select_token(&tokens, now).unwrap().id(), "b");
    }

    #[test]
    fn cool_down_ties_break_by_original_order() {
        let now = Utc::now();
        let until = now + Duration::seconds(15);
        let tokens = vec![
            CredentialToken::with_cool_down("a", "s-a", until),
            CredentialToken::with_cool_down("b", "s-b", until),
        ];
        assert_eq!(select_token(&tokens, now).unwrap().id(), "a");
    }

    #[test]
    fn empty_list_yields_none() {
        assert!(select_token(&[], Utc::now()).is_none());
    }
}
