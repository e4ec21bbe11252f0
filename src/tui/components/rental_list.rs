//! # Rental List Component
//!
//! Active rentals panel. Enter on a row opens the return dialog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::api::Rental;
use crate::core::format::format_timestamp;
use crate::tui::component::Component;
use crate::tui::components::{ListCursor, panel_block};

pub struct RentalList<'a> {
    pub rentals: &'a [Rental],
    pub cursor: &'a ListCursor,
    pub focused: bool,
}

impl<'a> RentalList<'a> {
    pub fn new(rentals: &'a [Rental], cursor: &'a ListCursor, focused: bool) -> Self {
        Self {
            rentals,
            cursor,
            focused,
        }
    }
}

fn rental_line(rental: &Rental) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("Customer: {}", rental.customer_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  Car ID: {}", rental.car_id)),
        Span::raw(format!("  Start: {}", format_timestamp(&rental.start_date))),
        Span::raw("  "),
        Span::styled("[Return & Generate Invoice]", Style::default().fg(Color::Red)),
    ])
}

impl Component for RentalList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block(" Active Rentals ", " Enter Return  r Refresh ", self.focused);

        if self.rentals.is_empty() {
            let empty = Paragraph::new("No active rentals.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rentals
            .iter()
            .map(|rental| ListItem::new(rental_line(rental)))
            .collect();
        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        let mut list_state =
            ListState::default().with_selected(self.cursor.selected(self.rentals.len()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
