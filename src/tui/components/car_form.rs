//! # Add Car Form Component
//!
//! Five single-line text fields and a submit control. The text itself lives
//! in `App::car_form`; this component only tracks which field has focus and
//! translates keys into form events.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarFormState` lives in `TuiState`
//! - `AddCarForm` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::form::{CarField, CarForm, TextEdit};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::panel_block;
use crate::tui::event::TuiEvent;

/// Persistent state for the form: the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarFormState {
    pub field: CarField,
}

impl Default for CarFormState {
    fn default() -> Self {
        Self {
            field: CarField::Make,
        }
    }
}

/// Events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarFormEvent {
    Edit(CarField, TextEdit),
    Submit,
    /// Leave the form and hand focus back to the panels.
    Leave,
}

impl EventHandler for CarFormState {
    type Event = CarFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CarFormEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.field = self.field.prev();
                None
            }
            TuiEvent::CursorDown => {
                self.field = self.field.next();
                None
            }
            TuiEvent::InputChar(c) => Some(CarFormEvent::Edit(self.field, TextEdit::Insert(*c))),
            TuiEvent::Paste(text) => {
                Some(CarFormEvent::Edit(self.field, TextEdit::Paste(text.clone())))
            }
            TuiEvent::Backspace => Some(CarFormEvent::Edit(self.field, TextEdit::Backspace)),
            TuiEvent::Submit => Some(CarFormEvent::Submit),
            TuiEvent::Escape => Some(CarFormEvent::Leave),
            _ => None,
        }
    }
}

/// Transient render wrapper for the Add Car form.
pub struct AddCarForm<'a> {
    pub form: &'a CarForm,
    pub state: &'a CarFormState,
    pub adding: bool,
    pub error: Option<&'a str>,
    pub focused: bool,
}

impl<'a> AddCarForm<'a> {
    pub fn new(
        form: &'a CarForm,
        state: &'a CarFormState,
        adding: bool,
        error: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            form,
            state,
            adding,
            error,
            focused,
        }
    }

    /// Submit label; the control is disabled while a submission is in flight.
    pub fn submit_label(adding: bool) -> &'static str {
        if adding { "Adding..." } else { "Add Car" }
    }

    fn field_line(&self, field: CarField) -> Line<'a> {
        let active = self.focused && self.state.field == field;
        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(format!("{:>13}: ", field.label()), label_style),
            Span::raw(self.form.field(field).to_string()),
        ];
        if active {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    }
}

impl Component for AddCarForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block(
            " Add Car ",
            " ↑↓ Field  Enter Submit  Esc Back ",
            self.focused,
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [fields_area, submit_area] =
            Layout::vertical([Constraint::Length(CarField::ALL.len() as u16), Constraint::Length(1)])
                .areas(inner);

        let lines: Vec<Line> = CarField::ALL.iter().map(|f| self.field_line(*f)).collect();
        frame.render_widget(Paragraph::new(lines), fields_area);

        let button_style = if self.adding {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Black).bg(Color::Blue)
        };
        let mut spans = vec![Span::styled(
            format!(" {} ", Self::submit_label(self.adding)),
            button_style,
        )];
        if let Some(error) = self.error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
        }
        frame.render_widget(Line::from(spans), submit_area);
    }
}
