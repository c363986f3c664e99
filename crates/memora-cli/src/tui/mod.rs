mod app;
mod views;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use memora_games::{Completion, NBackState, SessionController};

use app::App;

/// How long to wait for a key before re-checking the presentation timer.
const FRAME: Duration = Duration::from_millis(50);

/// Play the mounted n-back game full-screen.
///
/// Returns the completion, or `None` if the player quit.
pub fn run_nback(session: &mut SessionController) -> Result<Option<Completion>, String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(session);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.completion.take())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
) -> Result<(), String> {
    while !app.is_done() {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if !event::poll(FRAME).map_err(|e| format!("event error: {e}"))? {
            app.tick()?;
            continue;
        }

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return app.cancel();
            }

            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return app.cancel(),
                    KeyCode::Enter | KeyCode::Char('s')
                        if app.state() == Some(NBackState::NotStarted) =>
                    {
                        app.start();
                    }
                    KeyCode::Char(' ' | 'm') => app.press(),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Char('?') => app.toggle_help(),
                    _ => {}
                }
            }
        }

        app.tick()?;
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Cue grid
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_header(frame, app, chunks[0]);
    views::draw_grid(frame, app, chunks[1]);
    views::draw_feedback(frame, app, chunks[2]);
    views::draw_status_bar(frame, app, chunks[3]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
