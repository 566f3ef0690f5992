use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Label substrings used to locate the four checkable fields in a panel.
///
/// Matching is containment-based, so a previously added marker prefix does
/// not hide a field from a later run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldLabels {
    pub identity: String,
    pub rank: String,
    pub report: String,
    pub sender: String,
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self {
            identity: "Имя Фамилия | Static ID".to_string(),
            rank: "На какой ранг повышаетесь".to_string(),
            report: "Отчёт на повышение".to_string(),
            sender: "Отправил(а)".to_string(),
        }
    }
}

/// Configuration for the request checker and its scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Guild the reviewed channel belongs to.
    pub guild_id: String,

    /// Channel whose requests are reviewed.
    pub channel_id: String,

    /// Number of messages inspected per batch run.
    pub check_count: usize,

    /// Re-check requests that already carry a decision reaction.
    pub ignore_already_checked: bool,

    /// Gate for experimental behavior; toggles are logged.
    pub experimental_features: bool,

    /// Debounce before a run triggered by a new message (ms).
    pub debounce_ms: u64,

    /// Settle delay before a run triggered by opening the channel (ms).
    pub settle_ms: u64,

    /// Pause between requests within a batch run (ms). Backpressure
    /// against the rate-limited write API, not a performance knob.
    pub inter_message_delay_ms: u64,

    /// Retry budget for the remote report fetch.
    pub fetch_retries: u32,

    /// Window size for the remote report fetch.
    pub fetch_window: u8,

    /// Field label substrings.
    pub labels: FieldLabels,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            guild_id: String::new(),
            channel_id: String::new(),
            check_count: 5,
            ignore_already_checked: false,
            experimental_features: false,
            debounce_ms: 500,
            settle_ms: 1_500,
            inter_message_delay_ms: 1_500,
            fetch_retries: 2,
            fetch_window: 1,
            labels: FieldLabels::default(),
        }
    }
}

impl CheckerConfig {
    /// Create a config targeting one guild channel, with default knobs.
    pub fn for_channel(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
            ..Default::default()
        }
    }

    /// Toggle experimental features, logging the state change.
    pub fn set_experimental_features(&mut self, value: bool) {
        self.experimental_features = value;
        info!(
            "experimental features are {}",
            if value { "enabled" } else { "disabled" }
        );
    }

    /// Debounce delay for new-message triggers.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Settle delay for channel-opened triggers.
    #[must_use]
    pub const fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Pause between requests within a batch.
    #[must_use]
    pub const fn inter_message_delay(&self) -> Duration {
        Duration::from_millis(self.inter_message_delay_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.guild_id.is_empty() {
            return Err("guild_id must not be empty".to_string());
        }

        if self.channel_id.is_empty() {
            return Err("channel_id must not be empty".to_string());
        }

        if self.check_count == 0 {
            return Err("check_count must be > 0".to_string());
        }

        let labels = [
            &self.labels.identity,
            &self.labels.rank,
            &self.labels.report,
            &self.labels.sender,
        ];
        if labels.iter().any(|l| l.is_empty()) {
            return Err("field label substrings must not be empty".to_string());
        }

        Ok(())
    }
}
