//! # TitleBar Component
//!
//! Top status bar: application name, the backend it talks to, and the
//! latest status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.backend_url, &app.status_message);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Car Rental | Backend: http://localhost:8000 | Added Toyota Corolla"`
//! 2. **Default**: `"Car Rental | Backend: http://localhost:8000"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar<'a> {
    /// Backend base URL
    pub backend_url: &'a str,
    /// Transient status (e.g., "Adding car...", "Rental started for Ada")
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(backend_url: &'a str, status_message: &'a str) -> Self {
        Self {
            backend_url,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Car Rental", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | Backend: {}", self.backend_url)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
