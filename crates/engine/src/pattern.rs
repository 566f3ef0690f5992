//! Compiled text patterns for field extraction.
//!
//! Syntax only: the matchers pull structure out of free text and never judge
//! whether the extracted values are correct. Word classes are Unicode, so
//! Latin and Cyrillic input both match.

use once_cell::sync::Lazy;
use regex::Regex;

/// Claimed "name + identifier" pair: a two-token name and a 1-6 digit id,
/// with an optional separator (space, pipe, or a single-letter infix).
static IDENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<name>\w+\s\w+)(?:\s|\s?[|il]\s)?(?P<id>\d{1,6})")
        .expect("identity pattern is valid")
});

/// Rank transition of the form `<text> [<level>] → <text> [<level>]`.
static RANK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\w\s-]+\s\[(?P<current>\d+)\]\s→\s[\w\s-]+\s\[(?P<new>\d+)\]")
        .expect("rank pattern is valid")
});

/// Structured message reference inside a channel link.
static MESSAGE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https://(?:ptb\.|canary\.)?discord(?:app)?\.com/channels/(?P<guild>\d+)/(?P<channel>\d+)/(?P<message>\d+)",
    )
    .expect("message link pattern is valid")
});

/// Any URL-like substring; used to tell "no link at all" apart from "a link
/// we cannot parse".
static ANY_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://").expect("link probe pattern is valid"));

/// User mention, with or without the nickname bang.
static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@!?(?P<id>\d+)>").expect("mention pattern is valid"));

/// Extracted identity claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityMatch {
    pub name: String,
    pub id: String,
}

/// Extract a claimed name + identifier pair from free text.
#[must_use]
pub fn identity(text: &str) -> Option<IdentityMatch> {
    let caps = IDENTITY.captures(text)?;
    Some(IdentityMatch {
        name: caps["name"].trim().to_string(),
        id: caps["id"].trim().to_string(),
    })
}

/// Extracted rank transition; both levels are required for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTransition {
    pub current_level: String,
    pub new_level: String,
}

/// Extract a "current level → new level" pair from free text.
#[must_use]
pub fn rank_transition(text: &str) -> Option<RankTransition> {
    let caps = RANK.captures(text)?;
    Some(RankTransition {
        current_level: caps["current"].to_string(),
        new_level: caps["new"].to_string(),
    })
}

/// A resolved (guild, channel, message) reference from a channel link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLink {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
}

/// Extract a structured message reference from free text.
#[must_use]
pub fn message_link(text: &str) -> Option<MessageLink> {
    let caps = MESSAGE_LINK.captures(text)?;
    Some(MessageLink {
        guild_id: caps["guild"].to_string(),
        channel_id: caps["channel"].to_string(),
        message_id: caps["message"].to_string(),
    })
}

/// Whether the text contains any URL-like substring.
#[must_use]
pub fn contains_link(text: &str) -> bool {
    ANY_LINK.is_match(text)
}

/// Extract the user id from a `<@…>` mention.
#[must_use]
pub fn mention_user_id(text: &str) -> Option<String> {
    MENTION
        .captures(text)
        .map(|caps| caps["id"].to_string())
}
