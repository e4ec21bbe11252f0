//! # Modal Overlays
//!
//! Centered overlays drawn above the panels, topmost last:
//!
//! 1. `StartRentalModal`: customer name input with inline error
//! 2. `ReturnRentalModal`: tax rate input
//! 3. `InvoiceModal`: the invoice produced by the latest return
//! 4. `AlertModal`: blocking message that must be acknowledged
//!
//! All of them are stateless; their inputs live in `App`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::api::{Car, Invoice};
use crate::core::format::{format_money, format_percent, format_timestamp};
use crate::tui::component::Component;

fn modal_block<'a>(title: &'a str, help: &'a str, color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(help).centered())
        .padding(Padding::horizontal(1))
}

fn input_line<'a>(value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("> "),
        Span::raw(value),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ])
}

/// Start Rental dialog.
pub struct StartRentalModal<'a> {
    pub car: Option<&'a Car>,
    pub customer_name: &'a str,
    pub error: Option<&'a str>,
    pub in_flight: bool,
}

impl Component for StartRentalModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(56, 9, area);
        frame.render_widget(Clear, overlay);

        let help = if self.in_flight {
            " Starting... "
        } else {
            " Enter Confirm  Esc Cancel "
        };
        let mut lines = Vec::new();
        if let Some(car) = self.car {
            lines.push(Line::from(Span::styled(
                format!("{} {} ({})", car.make, car.model, car.plate_number),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from("Customer Name"));
        lines.push(input_line(self.customer_name));
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines).block(modal_block(" Start Rental ", help, Color::Blue));
        frame.render_widget(paragraph, overlay);
    }
}

/// Return Rental dialog.
pub struct ReturnRentalModal<'a> {
    pub tax_rate: &'a str,
    pub in_flight: bool,
}

impl Component for ReturnRentalModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(56, 7, area);
        frame.render_widget(Clear, overlay);

        let help = if self.in_flight {
            " Returning... "
        } else {
            " Enter Return  Esc Cancel "
        };
        let lines = vec![
            Line::from(Span::styled(
                "Tax Rate (e.g., 0.1 for 10%)",
                Style::default().fg(Color::Gray),
            )),
            input_line(self.tax_rate),
        ];
        let paragraph = Paragraph::new(lines).block(modal_block(
            " Return Rental & Generate Invoice ",
            help,
            Color::Red,
        ));
        frame.render_widget(paragraph, overlay);
    }
}

/// Invoice details for the rental that was just returned.
pub struct InvoiceModal<'a> {
    pub invoice: &'a Invoice,
}

impl InvoiceModal<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let inv = self.invoice;
        let label = Style::default().fg(Color::DarkGray);
        let field = |name: &str, value: String| {
            Line::from(vec![Span::styled(format!("{name}: "), label), Span::raw(value)])
        };
        vec![
            field("Invoice ID", inv.id.clone()),
            field("Customer", inv.customer_name.clone()),
            field("Days", inv.days.to_string()),
            field("Rate", format_money(inv.daily_rate)),
            field("Subtotal", format_money(inv.subtotal)),
            field(
                "Tax",
                format!(
                    "{} ({})",
                    format_money(inv.tax_amount),
                    format_percent(inv.tax_rate)
                ),
            ),
            Line::from(""),
            Line::from(Span::styled(
                format!("Total: {}", format_money(inv.total)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Period: {} → {}",
                    format_timestamp(&inv.start_date),
                    format_timestamp(&inv.end_date)
                ),
                Style::default().fg(Color::Gray),
            )),
        ]
    }
}

impl Component for InvoiceModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let overlay = centered_fixed(64, lines.len() as u16 + 2, area);
        frame.render_widget(Clear, overlay);
        let paragraph =
            Paragraph::new(lines).block(modal_block(" Invoice ", " Enter/Esc Close ", Color::Green));
        frame.render_widget(paragraph, overlay);
    }
}

/// Blocking alert; nothing else takes input until it is dismissed.
pub struct AlertModal<'a> {
    pub message: &'a str,
}

impl Component for AlertModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(50, 6, area);
        frame.render_widget(Clear, overlay);
        let paragraph = Paragraph::new(self.message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(modal_block(" Alert ", " Enter OK ", Color::Red));
        frame.render_widget(paragraph, overlay);
    }
}

/// A rect of at most `width` x `height`, centered in `outer`.
fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_car, sample_invoice};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(component: &mut dyn Component) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| component.render(f, f.area())).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_invoice_modal_totals() {
        let invoice = sample_invoice("i1");
        let text = render(&mut InvoiceModal { invoice: &invoice });
        assert!(text.contains("Total: $165.00"));
        assert!(text.contains("Tax: $15.00 (10%)"));
        assert!(text.contains("Subtotal: $150.00"));
        assert!(text.contains("Days: 3"));
    }

    #[test]
    fn test_invoice_modal_does_not_recompute_total() {
        let mut invoice = sample_invoice("i1");
        invoice.total = 170.0;
        let text = render(&mut InvoiceModal { invoice: &invoice });
        assert!(text.contains("Total: $170.00"));
    }

    #[test]
    fn test_start_rental_modal_shows_error() {
        let car = sample_car("c1", true);
        let text = render(&mut StartRentalModal {
            car: Some(&car),
            customer_name: "",
            error: Some("Customer name is required"),
            in_flight: false,
        });
        assert!(text.contains("Start Rental"));
        assert!(text.contains("Toyota Corolla"));
        assert!(text.contains("Customer name is required"));
    }

    #[test]
    fn test_return_modal_shows_tax_rate() {
        let text = render(&mut ReturnRentalModal {
            tax_rate: "0.1",
            in_flight: false,
        });
        assert!(text.contains("Tax Rate"));
        assert!(text.contains("> 0.1"));
    }

    #[test]
    fn test_alert_modal() {
        let text = render(&mut AlertModal {
            message: "Return failed: Rental not found",
        });
        assert!(text.contains("Return failed: Rental not found"));
    }

    #[test]
    fn test_centered_fixed_clamps_to_outer() {
        let outer = Rect::new(0, 0, 20, 5);
        let rect = centered_fixed(50, 10, outer);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
