//! Terminal entry point.
//!
//! This is the thin integration layer between the airwatch library and the
//! terminal: it owns raw mode and the alternate screen, maps key presses
//! to library events, dispatches them through `handle_event`, executes the
//! resulting actions, and re-renders on demand.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//! - `Ctrl+c`: quit
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: navigate
//! - `/`: enter search mode
//! - `a`: open the add-city dialog
//! - `d`: toggle dark mode
//! - `Enter`: show the selected reading's details
//! - `q`: quit
//!
//! Search mode:
//! - typing edits the query; `Enter` moves focus to the results
//! - `Esc`: exit search and clear the query
//! - `/` (while navigating): edit the query again
//!
//! Add dialog:
//! - typing edits the focused field; `Tab` switches field
//! - `Enter`: submit the draft, `Esc`: cancel (keeps the draft)

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};

use airwatch::app::{
    handle_event, Action, AppState, Event, InputMode, NoticeKind, SearchFocus,
};
use airwatch::{initialize, observability, ui, Config};

/// A pending one-line message, displayed until the next key press.
struct Notice {
    kind: NoticeKind,
    message: String,
}

/// Shim state: the library state plus terminal-side concerns.
struct App {
    state: AppState,
    notice: Option<Notice>,
}

fn main() -> io::Result<()> {
    let config = Config::from_env();
    let _guard = observability::init_tracing(&config);

    tracing::debug!("starting airwatch");

    let mut app = App {
        state: initialize(&config),
        notice: None,
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut app, &mut stdout);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    tracing::debug!("airwatch stopped");
    result
}

/// The blocking event loop: read, map, dispatch, execute, draw.
fn run(app: &mut App, stdout: &mut io::Stdout) -> io::Result<()> {
    draw(app, stdout)?;

    loop {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(app_event) = map_key_event(app.state.input_mode, &key) else {
                    continue;
                };

                // Any handled key dismisses the previous notice, the way a
                // dialog is dismissed before the next interaction.
                app.notice = None;

                match handle_event(&mut app.state, &app_event) {
                    Ok((should_render, actions)) => {
                        let mut quit = false;
                        for action in actions {
                            match action {
                                Action::Quit => quit = true,
                                Action::Notify { kind, message } => {
                                    app.notice = Some(Notice { kind, message });
                                }
                            }
                        }

                        if quit {
                            return Ok(());
                        }
                        if should_render {
                            draw(app, stdout)?;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "error handling event");
                    }
                }
            }
            TermEvent::Resize(_, _) => draw(app, stdout)?,
            _ => {}
        }
    }
}

/// Maps a terminal key press to a library event for the active mode.
fn map_key_event(mode: InputMode, key: &KeyEvent) -> Option<Event> {
    tracing::debug!(code = ?key.code, "key event");

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Event::KeyDown),
            KeyCode::Char('p') => Some(Event::KeyUp),
            KeyCode::Char('c') => Some(Event::Quit),
            _ => None,
        };
    }

    Some(match mode {
        InputMode::Normal => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
            KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
            KeyCode::Char('/') => Event::SearchMode,
            KeyCode::Char('a') => Event::OpenAddDialog,
            KeyCode::Char('d') => Event::ToggleDisplayMode,
            KeyCode::Char('q') => Event::Quit,
            KeyCode::Enter => Event::ShowDetail,
            KeyCode::Esc => Event::Escape,
            _ => return None,
        },
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Enter => Event::FocusResults,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Down => Event::KeyDown,
            KeyCode::Up => Event::KeyUp,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Char('/') => Event::FocusSearchBar,
            KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
            KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
            KeyCode::Enter => Event::ShowDetail,
            KeyCode::Char('q') => Event::Quit,
            _ => return None,
        },
        InputMode::AddEntry(_) => match key.code {
            KeyCode::Esc => Event::CancelAdd,
            KeyCode::Tab => Event::NextDraftField,
            KeyCode::Enter => Event::SubmitAdd,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        },
    })
}

/// Clears the screen and renders the dashboard plus any pending notice.
fn draw(app: &App, stdout: &mut io::Stdout) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let (cols, rows) = (cols as usize, rows as usize);

    execute!(stdout, Clear(ClearType::All))?;
    ui::render(&app.state, rows, cols);

    if let Some(notice) = &app.notice {
        ui::render_notice(
            rows.saturating_sub(3),
            notice.kind,
            &notice.message,
            app.state.theme(),
            cols,
        );
    }

    stdout.flush()
}
