use leptos::prelude::*;
use vibe_core::{MemorySession, Tab};

/// Всё состояние страницы. Сессия целиком живёт в одном сигнале:
/// изменения идут через `update`, чтение через `with`.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) session: RwSignal<MemorySession>,
    pub(crate) error: RwSignal<Option<String>>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            session: RwSignal::new(MemorySession::in_memory()),
            error: RwSignal::new(None),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    pub(crate) fn is_logged_in(&self) -> bool {
        self.session.with(|session| session.is_logged_in())
    }

    pub(crate) fn tab(&self) -> Tab {
        self.session.with(|session| session.view().tab())
    }
}
