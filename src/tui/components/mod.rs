//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: application name, backend URL, status
//! - `CarList`, `RentalList`, `InvoiceTable`: the three backend lists
//! - `StartRentalModal`, `ReturnRentalModal`, `InvoiceModal`, `AlertModal`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CarFormState`: focused field of the Add Car form, emits `CarFormEvent`s
//! - `ListCursor`: row selection for the list panels
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state. Anything that changes business state goes back to the event
//! loop as an `Action`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! CarList::new(&app.cars, &tui.car_cursor, focused).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status bar)
//! ├── car_form.rs       (Add Car form)
//! ├── car_list.rs       (inventory)
//! ├── rental_list.rs    (active rentals)
//! ├── invoice_table.rs  (invoice history)
//! ├── modals.rs         (overlays)
//! └── selection.rs      (list cursor)
//! ```

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

pub mod car_form;
pub mod car_list;
pub mod invoice_table;
pub mod modals;
pub mod rental_list;
pub mod selection;
mod title_bar;

pub use car_form::{AddCarForm, CarFormEvent, CarFormState};
pub use car_list::CarList;
pub use invoice_table::InvoiceTable;
pub use modals::{AlertModal, InvoiceModal, ReturnRentalModal, StartRentalModal};
pub use rental_list::RentalList;
pub use selection::ListCursor;
pub use title_bar::TitleBar;

/// Bordered panel; the help line is only shown while the panel has focus.
pub fn panel_block<'a>(title: &'a str, help: &'a str, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_alignment(Alignment::Left);
    if focused {
        block.title_bottom(Line::from(help).centered())
    } else {
        block
    }
}

/// Flattens a test terminal's buffer into newline-separated rows.
#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
