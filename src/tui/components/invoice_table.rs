//! # Invoice Table Component
//!
//! Historical invoices: ID, customer, days, rate, total and period.
//! Read-only; figures are shown exactly as the backend reported them.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::api::Invoice;
use crate::core::format::{format_date, format_money};
use crate::tui::component::Component;
use crate::tui::components::{ListCursor, panel_block};

pub struct InvoiceTable<'a> {
    pub invoices: &'a [Invoice],
    pub cursor: &'a ListCursor,
    pub focused: bool,
}

impl<'a> InvoiceTable<'a> {
    pub fn new(invoices: &'a [Invoice], cursor: &'a ListCursor, focused: bool) -> Self {
        Self {
            invoices,
            cursor,
            focused,
        }
    }
}

fn invoice_row(invoice: &Invoice) -> Row<'static> {
    Row::new(vec![
        Cell::from(invoice.id.clone()).style(Style::default().fg(Color::DarkGray)),
        Cell::from(invoice.customer_name.clone()),
        Cell::from(invoice.days.to_string()),
        Cell::from(format_money(invoice.daily_rate)),
        Cell::from(format_money(invoice.total)).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(format!(
            "{} → {}",
            format_date(&invoice.start_date),
            format_date(&invoice.end_date)
        )),
    ])
}

impl Component for InvoiceTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block(" Invoices ", " r Refresh ", self.focused);

        if self.invoices.is_empty() {
            let empty = Paragraph::new("No invoices yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec!["Invoice ID", "Customer", "Days", "Rate", "Total", "Period"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self.invoices.iter().map(invoice_row).collect();
        let widths = [
            Constraint::Length(26),
            Constraint::Min(14),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(25),
        ];
        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight);
        let mut table_state =
            TableState::default().with_selected(self.cursor.selected(self.invoices.len()));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
