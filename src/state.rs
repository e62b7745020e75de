//! Shared application state.
//!
//! One explicit [`AppState`] struct provided to the component tree as a
//! `Signal` from the app root; the setter methods below are the only
//! mutation surface. Every view may read any field, but each field is
//! written by exactly one view.

use dioxus::prelude::*;

use crate::api::{EmbeddingModel, HealthStatus, Model};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    messages: Vec<Message>,
    models: Vec<Model>,
    embedding_models: Vec<EmbeddingModel>,
    selected_model: Option<String>,
    selected_embedding_model: Option<String>,
    health: HealthStatus,
    dark_mode: bool,
}

impl AppState {
    /// Conversation so far, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append one message. The list only ever grows.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Replace the whole collection with the latest fetch.
    pub fn set_models(&mut self, models: Vec<Model>) {
        self.models = models;
    }

    pub fn embedding_models(&self) -> &[EmbeddingModel] {
        &self.embedding_models
    }

    pub fn set_embedding_models(&mut self, embedding_models: Vec<EmbeddingModel>) {
        self.embedding_models = embedding_models;
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    pub fn set_selected_model(&mut self, name: Option<String>) {
        self.selected_model = name;
    }

    pub fn selected_embedding_model(&self) -> Option<&str> {
        self.selected_embedding_model.as_deref()
    }

    pub fn set_selected_embedding_model(&mut self, name: Option<String>) {
        self.selected_embedding_model = name;
    }

    pub fn health(&self) -> &HealthStatus {
        &self.health
    }

    pub fn set_health(&mut self, health: HealthStatus) {
        self.health = health;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

/// Fetch the shared state provided at the app root.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_append_in_order() {
        let mut state = AppState::default();
        state.add_message(Message::user("hello"));
        state.add_message(Message::assistant("hi there"));
        state.add_message(Message::user("bye"));

        let roles: Vec<Role> = state.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(state.messages()[1].content, "hi there");
    }

    #[test]
    fn set_models_replaces_wholesale() {
        let mut state = AppState::default();
        state.set_models(vec![Model {
            name: "phi".to_string(),
            description: "small model".to_string(),
            is_default: false,
        }]);
        state.set_models(vec![Model {
            name: "llama3".to_string(),
            description: "general model".to_string(),
            is_default: true,
        }]);

        assert_eq!(state.models().len(), 1);
        assert_eq!(state.models()[0].name, "llama3");
    }

    #[test]
    fn selection_survives_collection_replacement() {
        // Selections are deliberately not revalidated against the latest
        // fetch; a stale name is the backend's problem.
        let mut state = AppState::default();
        state.set_selected_model(Some("phi".to_string()));
        state.set_models(Vec::new());
        assert_eq!(state.selected_model(), Some("phi"));

        state.set_selected_model(None);
        assert_eq!(state.selected_model(), None);
    }

    #[test]
    fn health_starts_offline_and_replaces_wholesale() {
        let mut state = AppState::default();
        assert!(!state.health().ollama);
        assert!(!state.health().qdrant);

        state.set_health(HealthStatus {
            ollama: true,
            qdrant: true,
            message: None,
        });
        assert!(state.health().ollama);

        state.set_health(HealthStatus::unreachable());
        assert!(!state.health().ollama);
        assert!(state.health().message.is_some());
    }

    #[test]
    fn dark_mode_toggle_round_trips() {
        let mut state = AppState::default();
        assert!(!state.dark_mode());
        state.toggle_dark_mode();
        assert!(state.dark_mode());
        state.toggle_dark_mode();
        assert!(!state.dark_mode());
    }
}
