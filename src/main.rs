mod build_info;
mod constants;
mod game;
mod highscore;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseEvent,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::{BIN_FLASH_MS, TICK_INTERVAL_MS};
use game::drop::{self, DropOutcome};
use game::session::{GameOverKind, GamePhase, GameSession};
use game::types::{standard_bin_row, Bin, PlayArea};
use input::{AppAction, PointerEvent};
use ui::ViewState;

enum LoopControl {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "recycle-rush {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Recycle Rush - Terminal Conveyor-Belt Sorting Game\n");
                println!("Usage: recycle-rush\n");
                println!("Drag trash into the matching bin with the mouse before it");
                println!("rides off the belt. Requires a terminal with mouse support.\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'recycle-rush --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal even if the loop errored
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let clock = Instant::now();
    let area = PlayArea::default();
    let bins = standard_bin_row(area);

    let mut session = GameSession::new(area);
    // Show the stored record on the start screen.
    session.high_score = highscore::load();
    let mut view = ViewState::new();
    let mut rng = rand::thread_rng();

    loop {
        let now = clock.elapsed().as_millis() as u64;

        terminal.draw(|frame| ui::draw(frame, &session, &bins, &view, now))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if let LoopControl::Quit = handle_key(key, &mut session, &mut view, now) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    handle_mouse(mouse, size, &mut session, &bins, &mut view, now);
                }
                _ => {}
            }
        }

        let events = session.tick(now, &mut rng);
        if let Some(kind) = events.game_over {
            finish_session(kind, &session, &mut view);
        }
    }
}

fn handle_key(
    key: KeyEvent,
    session: &mut GameSession,
    view: &mut ViewState,
    now: u64,
) -> LoopControl {
    let action = match input::map_key(key) {
        Some(action) => action,
        None => return LoopControl::Continue,
    };

    match action {
        AppAction::Quit => {
            if view.show_info {
                close_info(session, view, now);
            } else {
                return LoopControl::Quit;
            }
        }
        AppAction::Start => {
            if !view.show_info
                && matches!(session.phase, GamePhase::NotStarted | GamePhase::GameOver)
            {
                view.game_over = None;
                view.bin_flash = None;
                view.dragging = None;
                session.start(now, highscore::load());
            }
        }
        AppAction::ToggleInfo => {
            if view.show_info {
                close_info(session, view, now);
            } else {
                view.show_info = true;
                session.pause();
            }
        }
        AppAction::TogglePause => {
            if !view.show_info {
                match session.phase {
                    GamePhase::Playing => session.pause(),
                    GamePhase::Paused => session.resume(now),
                    _ => {}
                }
            }
        }
    }
    LoopControl::Continue
}

/// Close the sorting guide. Resuming is a no-op unless a live session was
/// paused underneath, so this is safe from every phase.
fn close_info(session: &mut GameSession, view: &mut ViewState, now: u64) {
    view.show_info = false;
    session.resume(now);
}

fn handle_mouse(
    mouse: MouseEvent,
    size: Rect,
    session: &mut GameSession,
    bins: &[Bin],
    view: &mut ViewState,
    now: u64,
) {
    // The guide sits on top of everything; no gestures underneath it.
    if view.show_info {
        return;
    }

    let layout = ui::screen_layout(size);
    let pointer = match input::map_mouse(layout.play, session.area, mouse) {
        Some(pointer) => pointer,
        None => return,
    };

    match pointer {
        PointerEvent::Down { x, y } => {
            if view.dragging.is_none() {
                view.dragging = drop::grab(session, x, y);
            }
        }
        PointerEvent::Drag { x, y } => {
            if let Some(id) = view.dragging {
                drop::drag_to(session, id, x, y);
            }
        }
        PointerEvent::Up { .. } => {
            if let Some(id) = view.dragging.take() {
                if let Some(report) = drop::release(session, id, bins) {
                    if let DropOutcome::Sorted(category) = report.outcome {
                        view.bin_flash = Some((category, now + BIN_FLASH_MS));
                    }
                    if let Some(kind) = report.game_over {
                        finish_session(kind, session, view);
                    }
                }
            }
        }
    }
}

fn finish_session(kind: GameOverKind, session: &GameSession, view: &mut ViewState) {
    if kind == GameOverKind::NewRecord {
        // Keep playing even when the record cannot be written.
        highscore::save(session.high_score).ok();
    }
    view.game_over = Some(kind);
}
