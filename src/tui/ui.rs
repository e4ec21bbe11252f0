use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AddCarForm, AlertModal, CarList, InvoiceModal, InvoiceTable, RentalList, ReturnRentalModal,
    StartRentalModal, TitleBar,
};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Height of the Add Car panel: five fields, the submit line, borders.
const CAR_FORM_HEIGHT: u16 = 8;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Fill, Length};
    let layout = Layout::vertical([Length(1), Length(CAR_FORM_HEIGHT), Fill(2), Fill(1), Fill(2)]);
    let [title_area, form_area, cars_area, rentals_area, invoices_area] =
        layout.areas(frame.area());

    TitleBar::new(&app.backend_url, &app.status_message).render(frame, title_area);

    AddCarForm::new(
        &app.car_form,
        &tui.car_form,
        app.adding_car,
        app.car_error.as_deref(),
        tui.focus == Focus::AddCar,
    )
    .render(frame, form_area);

    CarList::new(&app.cars, &tui.car_cursor, tui.focus == Focus::Cars).render(frame, cars_area);

    RentalList::new(
        &app.active_rentals,
        &tui.rental_cursor,
        tui.focus == Focus::Rentals,
    )
    .render(frame, rentals_area);

    InvoiceTable::new(
        &app.invoices,
        &tui.invoice_cursor,
        tui.focus == Focus::Invoices,
    )
    .render(frame, invoices_area);

    draw_overlays(frame, app);
}

/// Overlays in stacking order; later ones are drawn on top.
fn draw_overlays(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.renting_car_id.is_some() {
        StartRentalModal {
            car: app.renting_car(),
            customer_name: &app.customer_name,
            error: app.rent_error.as_deref(),
            in_flight: app.starting_rental,
        }
        .render(frame, area);
    }

    if app.returning_rental_id.is_some() {
        ReturnRentalModal {
            tax_rate: &app.tax_rate,
            in_flight: app.returning_rental,
        }
        .render(frame, area);
    }

    if let Some(invoice) = &app.last_invoice {
        InvoiceModal { invoice }.render(frame, area);
    }

    if let Some(message) = &app.alert {
        AlertModal { message }.render(frame, area);
    }
}
