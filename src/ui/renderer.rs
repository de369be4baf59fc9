//! Main UI rendering and coordination

use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Terminal session guard. Raw mode, the alternate screen, and optional
/// mouse capture are acquired on construction and released on drop, so the
/// terminal is restored even when the event loop exits with an error.
struct TerminalGuard {
    mouse_capture: bool,
}

impl TerminalGuard {
    fn new(mouse_capture: bool) -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(Self { mouse_capture })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort restore
        let _ = disable_raw_mode();
        if self.mouse_capture {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Run the main TUI application
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    // Terminal initialization, restored when the guard drops
    let _guard = TerminalGuard::new(config.ui.mouse_enabled)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let mut app = AppComponent::new(config);
    let mut event_handler = EventHandler::new();

    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed, coalescing bursts of input
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_render();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {}
        }

        // Check if app wants to quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
