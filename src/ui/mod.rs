//! Terminal presentation: HUD, conveyor scene, and modal overlays.

pub mod overlay;
pub mod play_scene;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::game::session::{GameOverKind, GamePhase, GameSession};
use crate::game::types::{Bin, TrashCategory};

/// Presentation-only state owned by the main loop: overlay visibility,
/// the transient bin flash, and the active gesture. Session truth stays
/// in `GameSession`.
pub struct ViewState {
    /// Sorting-guide overlay is open.
    pub show_info: bool,
    /// Bin flashed after a correct drop, until the deadline (ms).
    pub bin_flash: Option<(TrashCategory, u64)>,
    /// How the last session ended; shapes the game-over overlay.
    pub game_over: Option<GameOverKind>,
    /// Item currently held by the mouse.
    pub dragging: Option<u64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            show_info: false,
            bin_flash: None,
            game_over: None,
            dragging: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen regions derived from the terminal size. Input mapping uses the
/// same split, so mouse cells and drawn cells always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub hud: Rect,
    pub play: Rect,
}

pub fn screen_layout(size: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(size);
    ScreenLayout {
        hud: chunks[0],
        play: chunks[1],
    }
}

/// Draw one frame: scene first, then whichever overlay the phase calls
/// for, with the sorting guide on top of everything.
pub fn draw(
    frame: &mut Frame,
    session: &GameSession,
    bins: &[Bin],
    view: &ViewState,
    now_ms: u64,
) {
    let layout = screen_layout(frame.size());
    play_scene::render_hud(frame, layout.hud, session);
    play_scene::render_play_area(frame, layout.play, session, bins, view, now_ms);

    match session.phase {
        GamePhase::NotStarted => overlay::render_start(frame, layout.play, session),
        GamePhase::Paused if !view.show_info => overlay::render_paused(frame, layout.play),
        GamePhase::GameOver => {
            overlay::render_game_over(frame, layout.play, session, view.game_over)
        }
        _ => {}
    }

    if view.show_info {
        overlay::render_info(frame, layout.play);
    }
}
