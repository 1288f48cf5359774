//! Share codes
//!
//! A finished game is shared as an emoji grid plus a replay link. The link
//! carries the target's catalog key in the `s` query parameter; opening it
//! starts the same puzzle, after which the parameter is stripped so it is
//! consumed only once.

use crate::game::GameState;
use reqwest::Url;

/// Query parameter carrying the target word key
pub const SEED_PARAM: &str = "s";

pub const SHARE_HEADLINE: &str = "Check out my Infinite Wordle score!";

/// One row of squares per submitted guess, newline-separated
#[must_use]
pub fn emoji_grid(state: &GameState) -> String {
    state
        .feedback()
        .iter()
        .map(crate::core::Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `base` without its query and fragment, plus `?s=<key>`
///
/// # Examples
/// ```
/// use infinite_wordle::share::replay_url;
///
/// assert_eq!(replay_url("https://example.com/play?s=3#top", 41), "https://example.com/play?s=41");
/// ```
#[must_use]
pub fn replay_url(base: &str, key: i64) -> String {
    let end = base.find(['?', '#']).unwrap_or(base.len());
    format!("{}?{SEED_PARAM}={key}", &base[..end])
}

/// The complete text handed to the clipboard
#[must_use]
pub fn share_text(state: &GameState, base_url: &str) -> String {
    format!(
        "{SHARE_HEADLINE}\n\n{}\n\nWord length: {}\n\nPlay this puzzle: {}",
        emoji_grid(state),
        state.word_length,
        replay_url(base_url, state.target_word_key)
    )
}

/// A consumed replay link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLink {
    /// `None` when the parameter was present but not an integer
    pub seed: Option<i64>,
    /// The link with the seed parameter removed
    pub url: String,
}

/// Pull the seed out of a replay link
///
/// Returns `None` when the link is not an absolute URL or has no non-empty
/// seed parameter; such a link is left alone. Otherwise every seed parameter
/// is removed and other parameters and the fragment are kept. Names and
/// values are percent-decoded.
///
/// # Examples
/// ```
/// use infinite_wordle::share::decode;
///
/// let link = decode("https://example.com/?ref=mail&s=563#top").unwrap();
/// assert_eq!(link.seed, Some(563));
/// assert_eq!(link.url, "https://example.com/?ref=mail#top");
///
/// assert!(decode("https://example.com/?s=").is_none());
/// ```
#[must_use]
pub fn decode(link: &str) -> Option<ReplayLink> {
    let mut url = Url::parse(link).ok()?;

    let value = url
        .query_pairs()
        .find(|(name, _)| name == SEED_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())?;

    let seed = value.parse::<i64>().ok();
    if seed.is_none() {
        log::warn!("Ignoring replay parameter {value:?}: not an integer key");
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != SEED_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (name, value) in &kept {
            pairs.append_pair(name, value);
        }
    }

    Some(ReplayLink {
        seed,
        url: url.into(),
    })
}
