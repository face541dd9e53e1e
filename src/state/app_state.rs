//! Application state definitions

use super::forms::ReportForm;
use super::notification::Notification;

/// Overlay drawn above the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Path prompt for attaching an image
    ImagePrompt { input: String },
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ReportForm,
    pub overlay: Overlay,
    pub notification: Option<Notification>,
    /// A submission is in flight
    pub submitting: bool,
    /// Path of the last xlsx export, shown in the status bar
    pub last_export: Option<String>,
}

impl AppState {
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            form: ReportForm::new(roster),
            overlay: Overlay::None,
            notification: None,
            submitting: false,
            last_export: None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notification once its display time is over
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NOTIFICATION_TTL;
    use std::time::{Duration, Instant};

    #[test]
    fn test_new_state() {
        let state = AppState::new(vec!["Ana".to_string()]);
        assert_eq!(state.overlay, Overlay::None);
        assert!(state.notification.is_none());
        assert!(!state.submitting);
        assert_eq!(state.form.roster, vec!["Ana".to_string()]);
    }

    #[test]
    fn test_expire_notification() {
        let mut state = AppState::new(vec![]);
        state.notify(Notification::success("ok"));
        state.expire_notification();
        assert!(state.notification.is_some());

        if let Some(n) = state.notification.as_mut() {
            n.shown_at = Instant::now() - NOTIFICATION_TTL - Duration::from_millis(1);
        }
        state.expire_notification();
        assert!(state.notification.is_none());
    }
}
