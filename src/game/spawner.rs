//! Time-ramped item spawning.

use rand::Rng;

use crate::constants::{SPAWN_INTERVAL_MS, SPAWN_RAMP_PER_MINUTE};
use crate::game::session::GameSession;
use crate::game::types::{TrashCategory, ICONS_PER_CATEGORY};

/// Interval between spawns at `elapsed_minutes` into a session. Starts at
/// the base interval and shrinks toward zero without ever reaching it.
pub fn spawn_interval_ms(elapsed_minutes: f64) -> f64 {
    SPAWN_INTERVAL_MS / (1.0 + elapsed_minutes * SPAWN_RAMP_PER_MINUTE)
}

/// Spawn at most one item per call, once the current interval has elapsed
/// since the last spawn. Category and icon are uniform draws; the icon is
/// cosmetic.
pub fn maybe_spawn<R: Rng>(session: &mut GameSession, now_ms: u64, rng: &mut R) -> bool {
    let interval = spawn_interval_ms(session.elapsed_minutes(now_ms));
    if now_ms.saturating_sub(session.last_spawn_ms) as f64 <= interval {
        return false;
    }

    let category = TrashCategory::ALL[rng.gen_range(0..TrashCategory::ALL.len())];
    let icon = rng.gen_range(0..ICONS_PER_CATEGORY);
    session.spawn_item(category, icon);
    session.last_spawn_ms = now_ms;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::PlayArea;
    use rand::thread_rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn started_session() -> GameSession {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        session
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut session = started_session();
        let mut rng = thread_rng();
        assert!(!maybe_spawn(&mut session, 1_000, &mut rng));
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut session = started_session();
        let mut rng = thread_rng();
        assert!(maybe_spawn(&mut session, 4_100, &mut rng));
        assert_eq!(session.items.len(), 1);
        assert_eq!(session.last_spawn_ms, 4_100);
    }

    #[test]
    fn test_single_spawn_even_after_long_gap() {
        let mut session = started_session();
        let mut rng = thread_rng();
        // A whole minute without ticks still yields exactly one item.
        assert!(maybe_spawn(&mut session, 60_000, &mut rng));
        assert_eq!(session.items.len(), 1);
        assert!(!maybe_spawn(&mut session, 60_001, &mut rng));
        assert_eq!(session.items.len(), 1);
    }

    #[test]
    fn test_interval_shrinks_over_time() {
        let base = spawn_interval_ms(0.0);
        let at_two = spawn_interval_ms(2.0);
        let at_ten = spawn_interval_ms(10.0);
        assert!(at_two < base);
        assert!(at_ten < at_two);
        assert!(at_ten > 0.0);
        // 4000 / (1 + 2 * 0.5) = 2000
        assert!((at_two - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramped_interval_applies_to_spawns() {
        let mut session = started_session();
        let mut rng = thread_rng();
        // Ten minutes in, the interval is 4000 / 6 ≈ 667ms: a 1s gap that
        // would not qualify at the base rate now does.
        let now = 600_000;
        session.last_spawn_ms = now - 1_000;
        assert!(maybe_spawn(&mut session, now, &mut rng));
    }

    #[test]
    fn test_spawned_item_fields_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = started_session();
        let mut now = 0;
        for _ in 0..50 {
            now += 4_100;
            maybe_spawn(&mut session, now, &mut rng);
        }
        assert!(!session.items.is_empty());
        for item in &session.items {
            assert!(item.icon < ICONS_PER_CATEGORY);
            assert!(TrashCategory::ALL.contains(&item.category));
        }
    }

    #[test]
    fn test_all_categories_eventually_spawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut session = started_session();
        let mut now = 0;
        for _ in 0..200 {
            now += 4_100;
            maybe_spawn(&mut session, now, &mut rng);
        }
        for category in TrashCategory::ALL {
            assert!(
                session.items.iter().any(|i| i.category == category),
                "category {:?} never spawned",
                category
            );
        }
    }
}
