//! Headless game core: session state, spawning, motion, and drop scoring.
//!
//! Nothing in this module touches the terminal, the clock, or the
//! filesystem. Timestamps are caller-supplied monotonic milliseconds and
//! positions live in a logical coordinate space, so the whole core runs
//! under tests without a rendering surface.

pub mod drop;
pub mod motion;
pub mod session;
pub mod spawner;
pub mod types;

#[allow(unused_imports)]
pub use drop::{DropOutcome, DropReport};
#[allow(unused_imports)]
pub use session::{GameOverKind, GamePhase, GameSession, TickEvents};
#[allow(unused_imports)]
pub use types::{standard_bin_row, Bin, ItemMode, PlayArea, Rect, TrashCategory, TrashItem};
