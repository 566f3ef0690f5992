//! # Rankwatch Model
//!
//! Shared data model for the promotion-request reviewer: messages with
//! structured panels, member/role snapshots, reaction-derived decisions and
//! per-field verdicts.
//!
//! The types here carry no I/O. They are read-only snapshots of externally
//! owned state, except for [`Panel`] labels, which the engine rewrites
//! through an explicit annotation step.

mod member;
mod message;
mod verdict;

pub use member::{Member, Role};
pub use message::{FieldKind, Message, MessageKind, Panel, PanelField, Reaction};
pub use verdict::{Decision, Marker, Verdict};
