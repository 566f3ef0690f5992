use serde::{Deserialize, Serialize};

/// Tri-state outcome of interpreting a message's reaction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// A checkmark-family reaction is present.
    Approved,
    /// A cross-family reaction is present (and no checkmark).
    Rejected,
    /// No recognized reaction; the default state.
    Undecided,
}

impl Decision {
    /// Whether a reviewer has reached either terminal state.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

/// Per-field validation outcome.
///
/// `Indeterminate` arises only for the report-link check, when resolution is
/// impossible (network failure or an unparsable link).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    Indeterminate,
}

impl Verdict {
    /// The marker recording this verdict on a field label.
    #[must_use]
    pub const fn marker(self) -> Marker {
        match self {
            Self::Pass => Marker::Approved,
            Self::Fail => Marker::Rejected,
            Self::Indeterminate => Marker::Uncertain,
        }
    }
}

/// Emoji marker prepended to a field label to record a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Approved,
    Rejected,
    Uncertain,
}

impl Marker {
    /// Glyph rendered in front of the field label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Approved => "✅",
            Self::Rejected => "❌",
            Self::Uncertain => "⚠️",
        }
    }

    /// Whether `label` already starts with this marker's glyph.
    #[must_use]
    pub fn prefixes(self, label: &str) -> bool {
        label.starts_with(self.glyph())
    }

    /// Whether `label` starts with any of the given markers.
    #[must_use]
    pub fn any_prefixes(markers: &[Self], label: &str) -> bool {
        markers.iter().any(|m| m.prefixes(label))
    }
}
