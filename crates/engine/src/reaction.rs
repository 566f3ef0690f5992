//! Reaction-set classification into the tri-state [`Decision`].

use rankwatch_model::{Decision, Reaction};

/// Checkmark-family emoji recognized as approval.
const APPROVE_EMOJIS: [&str; 4] = ["✅", "☑️", "✓", "white_check_mark"];

/// Cross-family emoji recognized as rejection.
const REJECT_EMOJIS: [&str; 4] = ["❌", "✖️", "x", "cross_mark"];

/// Map a reaction set to a decision.
///
/// The approve vocabulary is tested before the reject vocabulary, so a
/// pathological set matching both classifies as `Approved`. This ordering is
/// the deterministic tie-break rule.
#[must_use]
pub fn classify(reactions: &[Reaction]) -> Decision {
    if reactions.is_empty() {
        return Decision::Undecided;
    }
    if has_approve(reactions) {
        Decision::Approved
    } else if has_reject(reactions) {
        Decision::Rejected
    } else {
        Decision::Undecided
    }
}

/// Whether any reaction belongs to the approve vocabulary: an exact glyph
/// match or an emoji name containing "check".
#[must_use]
pub fn has_approve(reactions: &[Reaction]) -> bool {
    reactions.iter().any(|r| {
        APPROVE_EMOJIS.contains(&r.emoji_name.as_str()) || r.emoji_name.contains("check")
    })
}

/// Whether any reaction belongs to the reject vocabulary: an exact glyph
/// match or an emoji name containing "cross".
#[must_use]
pub fn has_reject(reactions: &[Reaction]) -> bool {
    reactions.iter().any(|r| {
        REJECT_EMOJIS.contains(&r.emoji_name.as_str()) || r.emoji_name.contains("cross")
    })
}
