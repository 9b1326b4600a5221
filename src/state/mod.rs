// src/state/mod.rs
use std::sync::Arc;

use crate::net::ApiClient;
use crate::settings::Settings;
use crate::view::theme::Theme;

pub mod history;
pub mod upload;

pub use history::HistoryController;
pub use upload::UploadController;

// Sidebar pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Application,
    History,
}

/// Lifecycle of a single request. Exactly one state holds at a time;
/// `Idle` only exists before the first request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// Top-level application state: active page and theme plus the two
// controllers, each owning its own request lifecycle. Upload results live
// here so they survive navigating away from the Application page.
pub struct AppState {
    pub page: Page,
    pub theme: Theme,
    pub client: Arc<ApiClient>,
    pub upload: UploadController,
    pub history: HistoryController,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            page: Page::Home,
            theme: Theme::Dark,
            client: Arc::new(ApiClient::new(settings.api_base_url)),
            upload: UploadController::new(),
            history: HistoryController::new(),
        }
    }

    /// Navigate. Entering the History page resets its loader so the view
    /// re-fetches, matching a fresh mount.
    pub fn set_page(&mut self, page: Page) {
        if page == Page::History {
            self.history.reset();
        }
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_home_and_dark() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.upload.lifecycle.is_idle());
        assert!(state.history.lifecycle.is_idle());
    }

    #[test]
    fn request_state_accessors() {
        let state: RequestState<u32> = RequestState::Succeeded(7);
        assert_eq!(state.succeeded(), Some(&7));
        assert!(!state.is_pending());

        let failed: RequestState<u32> = RequestState::Failed("boom".to_string());
        assert_eq!(failed.failure(), Some("boom"));
        assert!(failed.succeeded().is_none());
    }

    #[test]
    fn entering_history_resets_the_loader() {
        let mut state = AppState::new(Settings::default());
        state.history.lifecycle = RequestState::Succeeded(Vec::new());
        state.set_page(Page::History);
        assert!(state.history.lifecycle.is_idle());
    }
}
