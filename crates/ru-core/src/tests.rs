//! Unit tests for ru-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn empty_id_is_invalid() {
        assert!(!AgentId::new("").is_valid());
        assert!(!AgentId::new("   ").is_valid());
        assert!(AgentId::new("Thing_Human12").is_valid());
    }

    #[test]
    fn display_is_raw_id() {
        assert_eq!(AgentId::from("Thing_Human7").to_string(), "Thing_Human7");
    }

    #[test]
    fn borrow_as_str_for_set_lookup() {
        let mut set = std::collections::HashSet::new();
        set.insert(AgentId::from("a"));
        assert!(set.contains("a"));
    }
}

#[cfg(test)]
mod time {
    use crate::time::{days_to_ticks, format_days};
    use crate::{GameClock, Tick, TICKS_PER_DAY};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
    }

    #[test]
    fn until_saturates() {
        assert_eq!(Tick(10).until(Tick(25)), 15);
        assert_eq!(Tick(25).until(Tick(10)), 0);
    }

    #[test]
    fn day_conversion() {
        assert_eq!(days_to_ticks(0), 0);
        assert_eq!(days_to_ticks(2), 2 * TICKS_PER_DAY);
        assert_eq!(format_days(TICKS_PER_DAY * 3 + TICKS_PER_DAY / 4), "3.25 days");
    }

    #[test]
    fn clock_set_and_advance() {
        let mut clock = GameClock::default();
        assert_eq!(clock.now(), Tick::ZERO);
        clock.set(Tick(1_000));
        clock.advance();
        assert_eq!(clock.now(), Tick(1_001));
    }

    #[test]
    fn clock_day_hour() {
        let clock = GameClock::new(Tick(TICKS_PER_DAY + TICKS_PER_DAY / 2));
        assert_eq!(clock.elapsed_dh(), (1, 12));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.random_int(0, 1_000), r2.random_int(0, 1_000));
        }
    }

    #[test]
    fn random_int_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.random_int(-5, 5);
            assert!((-5..5).contains(&v));
        }
    }

    #[test]
    fn inverted_range_yields_low() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.random_int(7, 7), 7);
        assert_eq!(rng.random_int(9, 3), 9);
    }

    #[test]
    fn random_index_covers_every_slot() {
        let mut rng = SimRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[rng.random_index(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.random_index(0), None);
    }

    #[test]
    fn works_through_trait_object() {
        let mut boxed: Box<dyn RandomSource> = Box::new(SimRng::new(1));
        let v = boxed.random_int(0, 10);
        assert!((0..10).contains(&v));
    }
}
