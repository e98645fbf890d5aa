#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use whackdown_core::constants::{BOOSTER_TIME_SECS, COLOR_ROTATION_INTERVAL_MS};
    use whackdown_core::enums::EnemyColor;

    use crate::countdown::Countdown;
    use crate::eligibility::{AnyClick, ColorMatch, KillPolicy};
    use crate::rotation::{pick_target, RotationTimer};
    use crate::scoring::star_rating;

    // ---- Countdown ----

    #[test]
    fn test_countdown_decrements_by_delta() {
        let mut clock = Countdown::new(60.0);
        assert!(!clock.advance(0.5));
        assert!((clock.remaining_secs() - 59.5).abs() < 1e-10);
        assert!(!clock.advance(1.5));
        assert!((clock.remaining_secs() - 58.0).abs() < 1e-10);
        assert!((clock.time_used() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut clock = Countdown::new(10.0);
        assert!(clock.advance(15.0), "Overshooting should report expiry");
        assert_eq!(clock.remaining_secs(), 0.0);

        // Stays clamped, never goes negative.
        assert!(clock.advance(5.0));
        assert_eq!(clock.remaining_secs(), 0.0);
    }

    #[test]
    fn test_countdown_exact_expiry() {
        let mut clock = Countdown::new(10.0);
        assert!(clock.advance(10.0));
        assert_eq!(clock.remaining_secs(), 0.0);
    }

    #[test]
    fn test_booster_applied_once_and_capped() {
        let mut clock = Countdown::new(100.0);
        clock.advance(40.0);

        assert!(clock.apply_booster());
        assert!(
            (clock.remaining_secs() - (60.0 + BOOSTER_TIME_SECS)).abs() < 1e-10,
            "Booster should add the fixed bonus"
        );

        // Second application is a no-op: value unchanged.
        let before = clock.remaining_secs();
        assert!(!clock.apply_booster());
        assert_eq!(clock.remaining_secs(), before);
    }

    #[test]
    fn test_booster_caps_at_limit() {
        let mut clock = Countdown::new(20.0);
        clock.advance(5.0);
        assert!(clock.apply_booster());
        assert_eq!(
            clock.remaining_secs(),
            20.0,
            "Booster should cap at the level time limit"
        );
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut clock = Countdown::new(30.0);
        clock.advance(29.0);
        clock.penalize(5.0);
        assert_eq!(clock.remaining_secs(), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        let mut clock = Countdown::new(50.0);
        assert!((clock.progress() - 1.0).abs() < 1e-10);
        clock.advance(25.0);
        assert!((clock.progress() - 0.5).abs() < 1e-10);
        clock.advance(100.0);
        assert_eq!(clock.progress(), 0.0);
    }

    // ---- Star rating ----

    /// Reference table: limit 100, thresholds 0.3 / 0.6.
    #[test]
    fn test_star_rating_thresholds() {
        assert_eq!(star_rating(20.0, 100.0), 3);
        assert_eq!(star_rating(50.0, 100.0), 2);
        assert_eq!(star_rating(90.0, 100.0), 1);
    }

    #[test]
    fn test_star_rating_boundaries_are_exclusive() {
        // Exactly on a threshold earns the lower rating.
        assert_eq!(star_rating(30.0, 100.0), 2);
        assert_eq!(star_rating(60.0, 100.0), 1);
    }

    // ---- Rotation ----

    #[test]
    fn test_rotation_due_at_interval() {
        let mut timer = RotationTimer::new();
        assert!(!timer.advance(COLOR_ROTATION_INTERVAL_MS - 1.0));
        assert!(timer.advance(1.0), "Interval reached, rotation due");
        // Accumulator reset: another full interval needed.
        assert!(!timer.advance(COLOR_ROTATION_INTERVAL_MS / 2.0));
        assert!((timer.progress() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_rotation_progress_starts_at_zero() {
        let timer = RotationTimer::new();
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_pick_target_respects_living_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let living = vec![EnemyColor::Red, EnemyColor::Blue];

        for _ in 0..50 {
            let picked = pick_target(&living, &mut rng).unwrap();
            assert!(
                living.contains(&picked),
                "Target must be a color with living holders, got {picked:?}"
            );
        }
    }

    #[test]
    fn test_pick_target_empty_set_skips() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(pick_target(&[], &mut rng), None);
    }

    #[test]
    fn test_pick_target_deterministic_with_seed() {
        let living = vec![EnemyColor::Red, EnemyColor::Green, EnemyColor::Blue];
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                pick_target(&living, &mut rng_a),
                pick_target(&living, &mut rng_b)
            );
        }
    }

    // ---- Eligibility ----

    #[test]
    fn test_any_click_always_kills() {
        for color in [EnemyColor::Red, EnemyColor::Green, EnemyColor::Blue] {
            assert!(AnyClick.should_kill(color));
        }
    }

    #[test]
    fn test_color_match_kills_target_only() {
        let policy = ColorMatch {
            target: EnemyColor::Red,
        };
        assert!(policy.should_kill(EnemyColor::Red));
        assert!(!policy.should_kill(EnemyColor::Green));
        assert!(!policy.should_kill(EnemyColor::Blue));
    }
}
