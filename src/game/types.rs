//! Plain data structures for the sorting game.
//!
//! Items and bins carry positions in logical units; the terminal layer
//! scales them to cells when drawing and scales mouse cells back when
//! reading gestures.

use crate::constants::{
    BELT_Y_FRACTION, BIN_HEIGHT, BIN_WIDTH, ITEM_HEIGHT, ITEM_WIDTH, PLAY_HEIGHT, PLAY_WIDTH,
};

/// Number of cosmetic icons per category.
pub const ICONS_PER_CATEGORY: usize = 5;

/// Waste classification carried by every item and bin. A matching pair at
/// release is what scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashCategory {
    Organic,
    Paper,
    Plastic,
    General,
}

impl TrashCategory {
    pub const ALL: [TrashCategory; 4] = [
        TrashCategory::Organic,
        TrashCategory::Paper,
        TrashCategory::Plastic,
        TrashCategory::General,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Organic => "Organic",
            Self::Paper => "Paper",
            Self::Plastic => "Plastic",
            Self::General => "General",
        }
    }

    /// Icon glyphs an item of this category can wear. Cosmetic only.
    pub fn icons(&self) -> [&'static str; ICONS_PER_CATEGORY] {
        match self {
            Self::Organic => ["🍎", "🍌", "🥬", "🦴", "🥪"],
            Self::Paper => ["📰", "📦", "📄", "🥡", "✉️"],
            Self::Plastic => ["🧴", "🥤", "🥣", "🖊️", "🧸"],
            Self::General => ["💿", "🍽️", "🎮", "👟", "😷"],
        }
    }
}

/// Which system currently owns an item's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMode {
    /// Riding the belt left-to-right at the session's current speed.
    Conveyor,
    /// Held by the pointer; automatic motion is suspended.
    Dragging,
    /// Released outside every bin; descending at the fixed fall speed.
    Falling,
}

/// A single piece of trash in play.
#[derive(Debug, Clone)]
pub struct TrashItem {
    /// Stable handle, valid for the lifetime of a drag gesture.
    pub id: u64,
    pub category: TrashCategory,
    /// Index into `category.icons()`.
    pub icon: usize,
    /// Top-left corner in logical units.
    pub x: f64,
    pub y: f64,
    pub mode: ItemMode,
}

impl TrashItem {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ITEM_WIDTH, ITEM_HEIGHT)
    }
}

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap test; rectangles that merely share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Logical play-area dimensions. The belt row, spawn point, and bin row
/// all derive from these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
        }
    }
}

impl PlayArea {
    /// Y coordinate where items ride the belt.
    pub fn belt_y(&self) -> f64 {
        self.height * BELT_Y_FRACTION
    }

    /// Where new items enter: just past the left edge, on the belt.
    pub fn spawn_point(&self) -> (f64, f64) {
        (-ITEM_WIDTH, self.belt_y())
    }
}

/// A disposal bin: a fixed region accepting one category. Bins are not
/// owned by the session; the presentation layer supplies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub category: TrashCategory,
    pub region: Rect,
}

/// The standard layout: one bin per category, evenly spaced along the
/// bottom edge. Regions never overlap.
pub fn standard_bin_row(area: PlayArea) -> Vec<Bin> {
    let count = TrashCategory::ALL.len() as f64;
    let gap = (area.width - count * BIN_WIDTH) / (count + 1.0);
    TrashCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| Bin {
            category,
            region: Rect::new(
                gap + i as f64 * (BIN_WIDTH + gap),
                area.height - BIN_HEIGHT,
                BIN_WIDTH,
                BIN_HEIGHT,
            ),
        })
        .collect()
}
