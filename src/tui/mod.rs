//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Input goes to the topmost thing on screen:
//!
//! ```text
//! alert  >  invoice  >  return dialog  >  start dialog  >  focused panel
//! ```
//!
//! Ctrl+C quits from anywhere. Panels are cycled with Tab / Shift+Tab.
//!
//! ## Effects
//!
//! Every `Effect` returned by `update()` runs on its own tokio task through
//! `core::workflow::execute`; results come back over an mpsc channel and are
//! folded in before the next frame.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{HttpBackend, RentalBackend};
use crate::core::action::{Action, Effect, Resource, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::{InputTarget, TextEdit};
use crate::core::state::App;
use crate::core::workflow;
use crate::tui::component::EventHandler;
use crate::tui::components::{CarFormEvent, CarFormState, ListCursor};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which panel receives keys when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    AddCar,
    Cars,
    Rentals,
    Invoices,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::AddCar, Focus::Cars, Focus::Rentals, Focus::Invoices];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub car_form: CarFormState,
    pub car_cursor: ListCursor,
    pub rental_cursor: ListCursor,
    pub invoice_cursor: ListCursor,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Cars, // Inventory first, like the page it replaces
            car_form: CarFormState::default(),
            car_cursor: ListCursor::default(),
            rental_cursor: ListCursor::default(),
            invoice_cursor: ListCursor::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Translate a terminal event into an action for the topmost surface.
///
/// Focus and cursor movement are handled here directly; anything touching
/// business state is returned as an `Action`.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.alert.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissAlert),
            _ => None,
        };
    }

    if app.last_invoice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissInvoice),
            _ => None,
        };
    }

    if app.returning_rental_id.is_some() {
        return match event {
            TuiEvent::Submit => Some(Action::ConfirmReturnRental),
            TuiEvent::Escape => Some(Action::CancelReturnRental),
            _ => text_edit(event).map(|edit| Action::Edit(InputTarget::TaxRate, edit)),
        };
    }

    if app.renting_car_id.is_some() {
        return match event {
            TuiEvent::Submit => Some(Action::ConfirmStartRental),
            TuiEvent::Escape => Some(Action::CancelStartRental),
            _ => text_edit(event).map(|edit| Action::Edit(InputTarget::CustomerName, edit)),
        };
    }

    match event {
        TuiEvent::NextFocus => {
            tui.focus = tui.focus.next();
            return None;
        }
        TuiEvent::PrevFocus => {
            tui.focus = tui.focus.prev();
            return None;
        }
        _ => {}
    }

    match tui.focus {
        Focus::AddCar => match tui.car_form.handle_event(event)? {
            CarFormEvent::Edit(field, edit) => Some(Action::Edit(InputTarget::Car(field), edit)),
            CarFormEvent::Submit => Some(Action::SubmitCar),
            CarFormEvent::Leave => {
                tui.focus = Focus::Cars;
                None
            }
        },
        Focus::Cars => {
            if tui.car_cursor.handle_event(event, app.cars.len()) {
                return None;
            }
            match event {
                TuiEvent::Submit => tui
                    .car_cursor
                    .selected(app.cars.len())
                    .map(|idx| &app.cars[idx])
                    .filter(|car| App::can_start_rental(car))
                    .map(|car| Action::OpenStartRental(car.id.clone())),
                _ => panel_shortcut(tui, event, Resource::Cars),
            }
        }
        Focus::Rentals => {
            if tui.rental_cursor.handle_event(event, app.active_rentals.len()) {
                return None;
            }
            match event {
                TuiEvent::Submit => tui
                    .rental_cursor
                    .selected(app.active_rentals.len())
                    .map(|idx| Action::OpenReturnRental(app.active_rentals[idx].id.clone())),
                _ => panel_shortcut(tui, event, Resource::ActiveRentals),
            }
        }
        Focus::Invoices => {
            if tui.invoice_cursor.handle_event(event, app.invoices.len()) {
                return None;
            }
            panel_shortcut(tui, event, Resource::Invoices)
        }
    }
}

/// Single-key shortcuts shared by the list panels.
fn panel_shortcut(tui: &mut TuiState, event: &TuiEvent, resource: Resource) -> Option<Action> {
    match event {
        TuiEvent::InputChar('r') => Some(Action::Refresh(resource)),
        TuiEvent::InputChar('R') => Some(Action::RefreshAll),
        TuiEvent::InputChar('a') => {
            tui.focus = Focus::AddCar;
            None
        }
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

fn text_edit(event: &TuiEvent) -> Option<TextEdit> {
    match event {
        TuiEvent::InputChar(c) => Some(TextEdit::Insert(*c)),
        TuiEvent::Paste(text) => Some(TextEdit::Paste(text.clone())),
        TuiEvent::Backspace => Some(TextEdit::Backspace),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn RentalBackend> = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let mut app = App::from_config(&config);
    app.backend_url = backend.base_url().to_string();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial load
    dispatch(&mut app, Action::RefreshAll, &backend, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(100));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = route_event(&app, &mut tui, &event)
                && dispatch(&mut app, action, &backend, &tx)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (backend responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, action, &backend, &tx);
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Fold an action into the state and start whatever effect it asks for.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    backend: &Arc<dyn RentalBackend>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::None => false,
        effect => {
            spawn_effect(effect, backend.clone(), tx.clone());
            false
        }
    }
}

fn spawn_effect(effect: Effect, backend: Arc<dyn RentalBackend>, tx: mpsc::Sender<Action>) {
    info!("Spawning backend task: {:?}", effect);
    tokio::spawn(async move {
        workflow::execute(backend.as_ref(), effect, &tx).await;
    });
}
