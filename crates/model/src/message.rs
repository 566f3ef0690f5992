use crate::verdict::Marker;
use serde::{Deserialize, Serialize};

/// A channel message, possibly carrying one structured request panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Message id (snowflake as text).
    pub id: String,

    /// Channel the message was posted in.
    pub channel_id: String,

    /// Guild owning the channel, if any.
    pub guild_id: Option<String>,

    /// Author user id.
    pub author_id: String,

    /// Message kind; only plain content messages are review subjects.
    pub kind: MessageKind,

    /// Plain text content.
    pub content: String,

    /// Structured panels attached to the message.
    #[serde(default)]
    pub panels: Vec<Panel>,

    /// Reactions currently attached to the message.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Message {
    /// Whether this is a plain content message.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == MessageKind::Plain
    }

    /// The single request panel, if the message carries exactly one panel
    /// with at least one field. Anything else is not a valid review subject.
    #[must_use]
    pub fn sole_panel(&self) -> Option<&Panel> {
        match self.panels.as_slice() {
            [panel] if !panel.fields.is_empty() => Some(panel),
            _ => None,
        }
    }
}

/// Message kind as exposed by the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A plain user-authored content message.
    #[default]
    Plain,
    /// Any system or rich message kind the reviewer ignores.
    Other,
}

/// A single emoji reaction on a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reaction {
    /// Emoji name, either a glyph ("✅") or a custom-emoji name
    /// ("custom_check_emoji").
    pub emoji_name: String,
}

impl Reaction {
    pub fn new(emoji_name: impl Into<String>) -> Self {
        Self {
            emoji_name: emoji_name.into(),
        }
    }
}

/// A structured panel: an ordered list of labeled fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Panel {
    pub fields: Vec<PanelField>,
}

impl Panel {
    /// Find a field whose label contains `needle`, ignoring any marker
    /// prefix a previous run may have added.
    #[must_use]
    pub fn field_containing(&self, needle: &str) -> Option<&PanelField> {
        self.fields.iter().find(|f| f.label.contains(needle))
    }

    /// Mutable variant of [`Panel::field_containing`], used by the
    /// annotation apply step.
    pub fn field_containing_mut(&mut self, needle: &str) -> Option<&mut PanelField> {
        self.fields.iter_mut().find(|f| f.label.contains(needle))
    }
}

/// A (label, value) pair inside a panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelField {
    /// Field label; may carry a one-time verdict marker prefix.
    pub label: String,

    /// Free text value, possibly containing a user mention or a link.
    pub value: String,
}

impl PanelField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether this field already carries a verdict for the given check.
    ///
    /// Each check recognizes its own marker set; once any of those markers
    /// is present the label is never prefixed again.
    #[must_use]
    pub fn is_marked_for(&self, kind: FieldKind) -> bool {
        Marker::any_prefixes(kind.recognized_markers(), &self.label)
    }

    /// Prefix the label with `marker` unless the field is already marked
    /// for `kind`. Returns whether the label changed.
    pub fn apply_marker(&mut self, kind: FieldKind, marker: Marker) -> bool {
        if self.is_marked_for(kind) {
            return false;
        }
        self.label = format!("{} {}", marker.glyph(), self.label);
        true
    }
}

/// The four checkable fields of a promotion request panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Claimed "name + identifier" pair.
    Identity,
    /// Claimed rank transition.
    Rank,
    /// Link to the supporting report message.
    Report,
    /// Mention of the submitting member.
    Sender,
}

impl FieldKind {
    /// Markers that count as "already checked" for this field.
    ///
    /// The sets differ per field: a failed rank check is recorded with the
    /// uncertain glyph, and the report check can produce all three.
    #[must_use]
    pub const fn recognized_markers(self) -> &'static [Marker] {
        match self {
            Self::Identity => &[Marker::Approved, Marker::Rejected],
            Self::Rank => &[Marker::Approved, Marker::Uncertain],
            Self::Report => &[Marker::Approved, Marker::Rejected, Marker::Uncertain],
            Self::Sender => &[Marker::Rejected],
        }
    }

    /// Human-readable name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Rank => "rank",
            Self::Report => "report",
            Self::Sender => "sender",
        }
    }
}
