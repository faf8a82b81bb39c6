//! Main TUI runner - entry point and event loop

use aether_app::config::Settings;
use aether_app::signals;
use aether_app::{process_message, AppState, Message};
use aether_core::prelude::*;
use tokio::sync::mpsc;

use crate::layout::ScreenAreas;
use crate::{event, render, terminal};

/// Run the interactive shell preview
///
/// `initial_section` is selected after the default section; an unknown key
/// leaves the default in place.
pub async fn run(settings: Settings, initial_section: Option<String>) -> Result<()> {
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    let mut state = AppState::with_settings(settings);
    if let Some(key) = initial_section {
        if !state.switcher.select_section(&key) {
            debug!(
                "Ignoring unknown section '{}', staying on '{}'",
                key,
                state.switcher.selection()
            );
        }
    }
    info!(
        "Aether shell starting on '{}' ({} sections)",
        state.switcher.selection(),
        state.switcher.registry().len()
    );

    let mut term = ratatui::init();
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("Mouse capture unavailable: {}", e);
        }
    }

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);
    signal_task.abort();

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    ratatui::restore();

    info!("Aether shell stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut areas = ScreenAreas::default();

    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| areas = render::view(frame, state))?;

        if let Some(message) = event::poll(&areas, state.switcher.nav(), state.ui_mode)? {
            process_message(state, message);
        }
    }

    Ok(())
}
