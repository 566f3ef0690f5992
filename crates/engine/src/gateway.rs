//! The injected capability contract the engine drives its checks through.

use crate::error::GatewayError;
use async_trait::async_trait;
use rankwatch_model::{Member, Message, Panel, Role};
use std::sync::Arc;

/// External collaborators the checker needs, behind one explicit interface.
///
/// Implementations wrap the transport layer (local message/reaction caches,
/// the roster, the rate-limited REST surface). The engine only ever reads
/// through this trait, except for [`Gateway::write_annotations`], which is
/// the single externally visible side effect of a validation run.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Messages currently cached for a channel, oldest first.
    async fn cached_messages(&self, channel_id: &str) -> Result<Vec<Message>, GatewayError>;

    /// A single cached message, if present. No network.
    async fn cached_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, GatewayError>;

    /// Resolve a guild member; `None` when the user is not a member.
    async fn member(&self, guild_id: &str, user_id: &str)
        -> Result<Option<Member>, GatewayError>;

    /// Resolve a guild role by id.
    async fn role(&self, guild_id: &str, role_id: &str) -> Result<Option<Role>, GatewayError>;

    /// Best-effort remote fetch of a small window of messages around a
    /// reference. `retries` bounds transport-level attempts; a failure
    /// surfaces as [`GatewayError::Network`].
    async fn fetch_messages_around(
        &self,
        channel_id: &str,
        message_id: &str,
        window: u8,
        retries: u32,
    ) -> Result<Vec<Message>, GatewayError>;

    /// Persist an updated panel back onto the request message.
    /// Fire-and-forget from the checker's perspective: failures are logged,
    /// never retried.
    async fn write_annotations(
        &self,
        channel_id: &str,
        message_id: &str,
        panel: Panel,
    ) -> Result<(), GatewayError>;
}

#[async_trait]
impl<T: Gateway + ?Sized> Gateway for Arc<T> {
    async fn cached_messages(&self, channel_id: &str) -> Result<Vec<Message>, GatewayError> {
        (**self).cached_messages(channel_id).await
    }

    async fn cached_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, GatewayError> {
        (**self).cached_message(channel_id, message_id).await
    }

    async fn member(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Option<Member>, GatewayError> {
        (**self).member(guild_id, user_id).await
    }

    async fn role(&self, guild_id: &str, role_id: &str) -> Result<Option<Role>, GatewayError> {
        (**self).role(guild_id, role_id).await
    }

    async fn fetch_messages_around(
        &self,
        channel_id: &str,
        message_id: &str,
        window: u8,
        retries: u32,
    ) -> Result<Vec<Message>, GatewayError> {
        (**self)
            .fetch_messages_around(channel_id, message_id, window, retries)
            .await
    }

    async fn write_annotations(
        &self,
        channel_id: &str,
        message_id: &str,
        panel: Panel,
    ) -> Result<(), GatewayError> {
        (**self).write_annotations(channel_id, message_id, panel).await
    }
}
