//! Presentation layer
//!
//! Renders aggregated views as plain text. Load errors are kept in a
//! [`ViewState`] and rendered inline in place of the view.

pub mod format;
pub mod student;
pub mod teacher;

pub use student::{render_student_bookings, render_student_page, render_student_summary};
pub use teacher::{render_teacher_dashboard, render_teacher_page};

use crate::utils::errors::Result;

/// State of a view fed by an asynchronous load
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    /// Settle the state from a finished load
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, severity = %e.severity(), "View failed to load");
                ViewState::Failed(e.user_message())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Render the ready value with `render`, or a placeholder for the other states
    pub fn render_with(&self, render: impl FnOnce(&T) -> String) -> String {
        match self {
            ViewState::Loading => "⏳ Loading...\n".to_string(),
            ViewState::Ready(value) => render(value),
            ViewState::Failed(message) => format!("⚠️ {}\n", message),
        }
    }
}
