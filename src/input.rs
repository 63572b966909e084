//! Translates terminal events into pointer gestures and app actions.
//!
//! Mouse coordinates arrive in terminal cells; the play region rect and
//! the logical play area fix the scaling between the two spaces. The
//! mapping here is pure so it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::types::PlayArea;

/// One step of a pointer gesture, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

/// Keyboard-level app actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Start a session, or restart after game over.
    Start,
    /// Toggle the sorting-guide overlay (opening pauses, closing resumes).
    ToggleInfo,
    /// Toggle a plain pause.
    TogglePause,
    /// Quit the app (or close the overlay when one is open).
    Quit,
}

/// Map a key press to an action, if it has one.
pub fn map_key(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::Start),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(AppAction::ToggleInfo),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(AppAction::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppAction::Quit),
        _ => None,
    }
}

/// Convert a cell to logical coordinates relative to the play region.
/// Cells map to the center of their logical footprint. Coordinates
/// outside the region come back out of range rather than clamped.
fn scale(play: Rect, area: PlayArea, column: u16, row: u16) -> (f64, f64) {
    let fx = column as f64 - play.x as f64 + 0.5;
    let fy = row as f64 - play.y as f64 + 0.5;
    (
        fx / play.width as f64 * area.width,
        fy / play.height as f64 * area.height,
    )
}

/// Map a mouse event to a pointer gesture step.
///
/// Only presses inside the play region start a gesture, but drags and
/// releases pass through wherever they land: a gesture that wanders off
/// the board must still resolve.
pub fn map_mouse(play: Rect, area: PlayArea, mouse: MouseEvent) -> Option<PointerEvent> {
    if play.width == 0 || play.height == 0 {
        return None;
    }
    let inside = mouse.column >= play.x
        && mouse.column < play.x + play.width
        && mouse.row >= play.y
        && mouse.row < play.y + play.height;
    let (x, y) = scale(play, area, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
        _ => None,
    }
}
