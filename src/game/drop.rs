//! Drag gestures and release resolution.
//!
//! A gesture owns its item from `grab` to `release`; the motion model
//! skips Dragging items, so ownership transfer is a plain mode switch.

use crate::constants::{ITEM_HEIGHT, ITEM_WIDTH, SCORE_PER_SORT};
use crate::game::session::{GameOverKind, GamePhase, GameSession};
use crate::game::types::{Bin, ItemMode, TrashCategory};

/// How a release resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Landed in the bin of its own category: scored.
    Sorted(TrashCategory),
    /// Landed in a bin of another category: one life lost.
    WrongBin(TrashCategory),
    /// Landed outside every bin: the item is now falling.
    NoBin,
}

/// Full result of a release, including a session end it may have caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    pub outcome: DropOutcome,
    pub game_over: Option<GameOverKind>,
}

/// Begin a drag: hand the topmost loose item under the pointer to the
/// gesture. Items can only be grabbed mid-play.
pub fn grab(session: &mut GameSession, x: f64, y: f64) -> Option<u64> {
    if session.phase != GamePhase::Playing {
        return None;
    }
    // Later spawns draw on top, so scan newest-first.
    let id = session
        .items
        .iter()
        .rev()
        .find(|item| item.mode != ItemMode::Dragging && item.bounds().contains(x, y))
        .map(|item| item.id)?;
    if let Some(item) = session.item_mut(id) {
        item.mode = ItemMode::Dragging;
    }
    Some(id)
}

/// Keep a dragged item centered under the pointer.
pub fn drag_to(session: &mut GameSession, id: u64, x: f64, y: f64) {
    if let Some(item) = session.item_mut(id) {
        if item.mode == ItemMode::Dragging {
            item.x = x - ITEM_WIDTH / 2.0;
            item.y = y - ITEM_HEIGHT / 2.0;
        }
    }
}

/// Resolve the end of a gesture. Runs once per gesture; the first bin the
/// item overlaps decides the outcome. Outside every bin the item starts
/// falling instead of being destroyed.
///
/// Releases still resolve after a mid-drag game over; the guarded
/// lives check keeps a finished session from ending twice.
pub fn release(session: &mut GameSession, id: u64, bins: &[Bin]) -> Option<DropReport> {
    let index = session
        .items
        .iter()
        .position(|item| item.id == id && item.mode == ItemMode::Dragging)?;

    let bounds = session.items[index].bounds();
    match bins.iter().find(|bin| bounds.intersects(&bin.region)) {
        None => {
            session.items[index].mode = ItemMode::Falling;
            Some(DropReport {
                outcome: DropOutcome::NoBin,
                game_over: None,
            })
        }
        Some(bin) => {
            let item = session.items.remove(index);
            let outcome = if item.category == bin.category {
                session.score += SCORE_PER_SORT;
                DropOutcome::Sorted(bin.category)
            } else {
                session.lives = session.lives.saturating_sub(1);
                DropOutcome::WrongBin(bin.category)
            };
            Some(DropReport {
                outcome,
                game_over: session.check_game_over(),
            })
        }
    }
}
