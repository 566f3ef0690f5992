//! The request validation orchestrator.
//!
//! Ties a request message to member data, drives the three field checks plus
//! the sender check, and performs at most one annotation write per request.

use crate::config::CheckerConfig;
use crate::error::{EngineError, Result};
use crate::gateway::Gateway;
use crate::{pattern, reaction, report, validator};
use log::{debug, error, info, warn};
use rankwatch_model::{FieldKind, Marker, Member, Message, Panel, Role};
use serde::Serialize;
use tokio::time;

/// How many requests a run looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Only the newest request; used after a new-message trigger.
    NewestOnly,
    /// The newest `check_count` requests, processed oldest first.
    Batch,
}

/// Summary of one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Requests examined.
    pub scanned: usize,
    /// Requests that received an annotation write.
    pub annotated: usize,
    /// Requests left untouched (already checked, malformed, or unchanged).
    pub skipped: usize,
}

/// Validates promotion requests in one target channel.
pub struct RequestChecker<G> {
    gateway: G,
    config: CheckerConfig,
}

impl<G: Gateway> RequestChecker<G> {
    /// Create a checker; the configuration is validated up front.
    pub fn new(gateway: G, config: CheckerConfig) -> Result<Self> {
        config.validate().map_err(EngineError::invalid_config)?;
        Ok(Self { gateway, config })
    }

    #[must_use]
    pub const fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Run one validation pass over the target channel.
    ///
    /// Requests are processed strictly sequentially, oldest first, with a
    /// fixed pause between them to respect the rate-limited write API.
    pub async fn run(&self, mode: RunMode) -> Result<RunStats> {
        let messages = self.gateway.cached_messages(&self.config.channel_id).await?;

        let candidates: Vec<&Message> =
            messages.iter().filter(|m| self.is_subject(m)).collect();
        let take = match mode {
            RunMode::NewestOnly => 1,
            RunMode::Batch => self.config.check_count,
        };
        let start = candidates.len().saturating_sub(take);
        let batch = &candidates[start..];

        let mut stats = RunStats::default();
        for (index, message) in batch.iter().enumerate() {
            stats.scanned += 1;
            match self.check_request(message).await {
                Some(panel) => {
                    match self
                        .gateway
                        .write_annotations(&self.config.channel_id, &message.id, panel)
                        .await
                    {
                        Ok(()) => stats.annotated += 1,
                        Err(err) => {
                            // Not retried; the next triggering event will
                            // pick the request up again.
                            error!("annotation write failed for message {}: {err}", message.id);
                            stats.skipped += 1;
                        }
                    }
                }
                None => stats.skipped += 1,
            }

            if index + 1 < batch.len() {
                time::sleep(self.config.inter_message_delay()).await;
            }
        }

        Ok(stats)
    }

    /// Whether a message is a valid review subject at all.
    fn is_subject(&self, message: &Message) -> bool {
        message.channel_id == self.config.channel_id
            && message.guild_id.as_deref() == Some(self.config.guild_id.as_str())
            && message.is_plain()
            && message.sole_panel().is_some()
    }

    /// Validate one request; returns the updated panel when any label
    /// changed, `None` otherwise. All field-level failures are absorbed
    /// into markers here.
    async fn check_request(&self, message: &Message) -> Option<Panel> {
        let request_decision = reaction::classify(&message.reactions);
        if !self.config.ignore_already_checked && request_decision.is_decided() {
            debug!("request {} already carries a decision, skipping", message.id);
            return None;
        }

        info!("checking request {}", message.id);

        let panel = message.sole_panel()?;
        let labels = &self.config.labels;
        let identity = panel.field_containing(&labels.identity)?;
        let rank = panel.field_containing(&labels.rank)?;
        let report_field = panel.field_containing(&labels.report)?;
        let sender = panel.field_containing(&labels.sender)?;

        let user_id = pattern::mention_user_id(&sender.value)?;
        let member = match self.gateway.member(&self.config.guild_id, &user_id).await {
            Ok(member) => member,
            Err(err) => {
                warn!("member lookup failed for user {user_id}: {err}");
                return None;
            }
        };

        let mut planned: Vec<(FieldKind, Marker)> = Vec::new();
        match member {
            Some(member) => {
                planned.push((
                    FieldKind::Identity,
                    validator::check_identity(&identity.value, &member),
                ));

                let roles = self.resolve_roles(&member).await;
                if let Some(marker) =
                    validator::check_rank(&rank.value, request_decision, &roles)
                {
                    planned.push((FieldKind::Rank, marker));
                }

                let verdict = report::check_report(
                    &self.gateway,
                    &member,
                    &report_field.value,
                    &self.config,
                )
                .await;
                info!("report status for {}: {verdict:?}", message.id);
                planned.push((FieldKind::Report, verdict.marker()));
            }
            None => {
                info!("submitter {user_id} is not a guild member");
                planned.push((FieldKind::Sender, Marker::Rejected));
            }
        }

        // Single apply step: all label rewrites happen together, and each
        // check stays idempotent against labels marked by earlier runs.
        let mut updated = panel.clone();
        let mut changed = false;
        for (kind, marker) in planned {
            if let Some(field) = updated.field_containing_mut(self.label_needle(kind)) {
                changed |= field.apply_marker(kind, marker);
            }
        }
        changed.then_some(updated)
    }

    async fn resolve_roles(&self, member: &Member) -> Vec<Role> {
        let mut roles = Vec::with_capacity(member.role_ids.len());
        for role_id in &member.role_ids {
            match self.gateway.role(&self.config.guild_id, role_id).await {
                Ok(Some(role)) => roles.push(role),
                Ok(None) => debug!("role {role_id} not found"),
                Err(err) => warn!("role lookup failed for {role_id}: {err}"),
            }
        }
        roles
    }

    fn label_needle(&self, kind: FieldKind) -> &str {
        let labels = &self.config.labels;
        match kind {
            FieldKind::Identity => &labels.identity,
            FieldKind::Rank => &labels.rank,
            FieldKind::Report => &labels.report,
            FieldKind::Sender => &labels.sender,
        }
    }
}
