//! Terminal setup and the event loop.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, info, instrument};

use crate::app::App;
use crate::ui;

/// Enters raw mode and the alternate screen with mouse capture.
///
/// Raw mode is switched back off if the screen cannot be set up.
pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = leave_terminal(&mut stdout);
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undoes [`setup_terminal`].
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()
}

/// Restores the terminal before the default panic message is printed.
///
/// Must be installed before [`setup_terminal`]; the previous hook still runs.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal(&mut io::stdout());
        previous(info);
    }));
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Safe to call when none of them is active.
pub fn leave_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Draws, waits up to `tick` for an event, applies it; until the user quits.
#[instrument(skip(terminal, app))]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting game loop");

    while app.is_running() {
        let mut layout = ui::BoardLayout::default();
        terminal.draw(|f| layout = ui::draw(f, &app))?;
        app.set_layout(layout);

        if event::poll(tick)? {
            let event = event::read()?;
            debug!(?event, "Terminal event");
            app.handle_event(&event);
        }
    }

    info!(outcome = ?app.state().outcome(), "Game loop finished");
    Ok(())
}
