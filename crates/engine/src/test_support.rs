//! In-memory gateway and builders shared by the engine's unit tests.

use crate::error::GatewayError;
use crate::gateway::Gateway;
use async_trait::async_trait;
use rankwatch_model::{Member, Message, MessageKind, Panel, PanelField, Reaction, Role};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Gateway backed by plain in-memory state. Writes update the cached copy
/// of the message, mirroring how the real transport's cache behaves.
#[derive(Default)]
pub struct MockGateway {
    cached: Mutex<Vec<Message>>,
    remote: Mutex<Vec<Message>>,
    members: Mutex<HashMap<String, Member>>,
    roles: Mutex<HashMap<String, Role>>,
    writes: Mutex<Vec<(String, String, Panel)>>,
    fetch_calls: AtomicUsize,
    fail_fetch: bool,
}

impl MockGateway {
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn put_cached(&self, message: Message) {
        self.cached.lock().unwrap().push(message);
    }

    pub fn put_remote(&self, message: Message) {
        self.remote.lock().unwrap().push(message);
    }

    pub fn put_member(&self, member: Member) {
        self.members
            .lock()
            .unwrap()
            .insert(member.user_id.clone(), member);
    }

    pub fn put_role(&self, role: Role) {
        self.roles.lock().unwrap().insert(role.id.clone(), role);
    }

    pub fn writes(&self) -> Vec<(String, String, Panel)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn cached_messages(&self, channel_id: &str) -> Result<Vec<Message>, GatewayError> {
        Ok(self
            .cached
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .cloned()
            .collect())
    }

    async fn cached_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, GatewayError> {
        Ok(self
            .cached
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.channel_id == channel_id && m.id == message_id)
            .cloned())
    }

    async fn member(
        &self,
        _guild_id: &str,
        user_id: &str,
    ) -> Result<Option<Member>, GatewayError> {
        Ok(self.members.lock().unwrap().get(user_id).cloned())
    }

    async fn role(&self, _guild_id: &str, role_id: &str) -> Result<Option<Role>, GatewayError> {
        Ok(self.roles.lock().unwrap().get(role_id).cloned())
    }

    async fn fetch_messages_around(
        &self,
        channel_id: &str,
        _message_id: &str,
        _window: u8,
        _retries: u32,
    ) -> Result<Vec<Message>, GatewayError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(GatewayError::network("connection reset"));
        }
        Ok(self
            .remote
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .cloned()
            .collect())
    }

    async fn write_annotations(
        &self,
        channel_id: &str,
        message_id: &str,
        panel: Panel,
    ) -> Result<(), GatewayError> {
        if let Some(cached) = self
            .cached
            .lock()
            .unwrap()
            .iter_mut()
            .find(|m| m.channel_id == channel_id && m.id == message_id)
        {
            cached.panels = vec![panel.clone()];
        }
        self.writes
            .lock()
            .unwrap()
            .push((channel_id.to_string(), message_id.to_string(), panel));
        Ok(())
    }
}

/// Builder for test messages; defaults to a plain message in guild "100".
pub struct MessageBuilder {
    message: Message,
}

pub fn message(id: &str, channel_id: &str) -> MessageBuilder {
    MessageBuilder {
        message: Message {
            id: id.to_string(),
            channel_id: channel_id.to_string(),
            guild_id: Some("100".to_string()),
            author_id: "1000".to_string(),
            kind: MessageKind::Plain,
            content: String::new(),
            panels: Vec::new(),
            reactions: Vec::new(),
        },
    }
}

impl MessageBuilder {
    pub fn content(mut self, content: &str) -> Self {
        self.message.content = content.to_string();
        self
    }

    pub fn guild(mut self, guild_id: &str) -> Self {
        self.message.guild_id = Some(guild_id.to_string());
        self
    }

    pub fn kind(mut self, kind: MessageKind) -> Self {
        self.message.kind = kind;
        self
    }

    pub fn reactions(mut self, names: &[&str]) -> Self {
        self.message.reactions = names.iter().map(|name| Reaction::new(*name)).collect();
        self
    }

    pub fn panel(mut self, panel: Panel) -> Self {
        self.message.panels.push(panel);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

pub fn member(user_id: &str) -> Member {
    member_named(user_id, "иван петров | 1234")
}

pub fn member_named(user_id: &str, display_name: &str) -> Member {
    Member {
        user_id: user_id.to_string(),
        display_name: display_name.to_string(),
        role_ids: Vec::new(),
    }
}

/// A well-formed request panel with the default field labels.
pub fn request_panel(identity: &str, rank: &str, report: &str, sender: &str) -> Panel {
    Panel {
        fields: vec![
            PanelField::new("Имя Фамилия | Static ID", identity),
            PanelField::new("На какой ранг повышаетесь", rank),
            PanelField::new("Отчёт на повышение", report),
            PanelField::new("Отправил(а)", sender),
        ],
    }
}
