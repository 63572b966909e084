//! Per-tick motion for items the player is not holding.

use crate::constants::FALL_SPEED;
use crate::game::session::GameSession;
use crate::game::types::ItemMode;

/// Boundary exits observed during one advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionEvents {
    pub belt_misses: u32,
    pub floor_misses: u32,
}

/// Move every Conveyor and Falling item one step. Items that leave the
/// play area are misses: removed, one life each (lives saturate at zero).
/// Dragging items are untouched; the pointer owns them until release.
pub fn advance(session: &mut GameSession, now_ms: u64) -> MotionEvents {
    let speed = session.current_speed(now_ms);
    let width = session.area.width;
    let height = session.area.height;

    let mut events = MotionEvents::default();
    session.items.retain_mut(|item| match item.mode {
        ItemMode::Dragging => true,
        ItemMode::Conveyor => {
            item.x += speed;
            if item.x > width {
                events.belt_misses += 1;
                false
            } else {
                true
            }
        }
        ItemMode::Falling => {
            item.y += FALL_SPEED;
            if item.y > height {
                events.floor_misses += 1;
                false
            } else {
                true
            }
        }
    });

    let lost = events.belt_misses + events.floor_misses;
    session.lives = session.lives.saturating_sub(lost);
    events
}
