//! # Car List Component
//!
//! Inventory panel. One row per car with its availability badge and a
//! "Start Rental" control that is only enabled for available cars.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListCursor` lives in `TuiState`
//! - `CarList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::api::Car;
use crate::core::format::format_money;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ListCursor, panel_block};

pub struct CarList<'a> {
    pub cars: &'a [Car],
    pub cursor: &'a ListCursor,
    pub focused: bool,
}

impl<'a> CarList<'a> {
    pub fn new(cars: &'a [Car], cursor: &'a ListCursor, focused: bool) -> Self {
        Self {
            cars,
            cursor,
            focused,
        }
    }
}

fn availability_badge(car: &Car) -> Span<'static> {
    if car.available {
        Span::styled(" Available ", Style::default().fg(Color::Black).bg(Color::Green))
    } else {
        Span::styled(" Rented ", Style::default().fg(Color::Black).bg(Color::Yellow))
    }
}

fn start_control(car: &Car) -> Span<'static> {
    if App::can_start_rental(car) {
        Span::styled("[Start Rental]", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(
            "[Start Rental]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        )
    }
}

fn car_line(car: &Car) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} {}", car.make, car.model),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  Year: {}  Plate: {}  ", car.year, car.plate_number)),
        Span::styled(
            format!("{}/day", format_money(car.daily_rate)),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("  "),
        availability_badge(car),
        Span::raw("  "),
        start_control(car),
    ])
}

impl Component for CarList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block(" Cars ", " Enter Start Rental  r Refresh ", self.focused);

        if self.cars.is_empty() {
            let empty = Paragraph::new("No cars yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .cars
            .iter()
            .map(|car| ListItem::new(car_line(car)))
            .collect();
        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        let mut list_state =
            ListState::default().with_selected(self.cursor.selected(self.cars.len()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
