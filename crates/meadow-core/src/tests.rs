//! Unit tests for meadow-core.

#[cfg(test)]
mod vitals {
    use crate::{Health, Stamina};

    #[test]
    fn health_change_clamps_high_and_low() {
        let mut h = Health::new(100);
        h.change(50);
        assert_eq!(h.current, 100);
        h.change(-250);
        assert_eq!(h.current, 0);
        assert!(h.is_dead());
    }

    #[test]
    fn health_never_leaves_bounds_under_long_sequences() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        let mut h = Health::new(100);
        let mut s = Stamina::new(60);
        for _ in 0..10_000 {
            let delta: i32 = rng.gen_range(-300..300);
            h.change(delta);
            s.change(delta);
            assert!((0..=h.max).contains(&h.current));
            assert!((0..=s.max).contains(&s.current));
        }
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut h = Health::with_current(10, 100);
        h.change(i32::MAX);
        assert_eq!(h.current, 100);
        h.change(i32::MIN);
        assert_eq!(h.current, 0);
    }

    #[test]
    fn with_current_clamps() {
        assert_eq!(Health::with_current(130, 100).current, 100);
        assert_eq!(Stamina::with_current(-4, 100).current, 0);
    }

    #[test]
    fn depleted_stamina_halves_speed() {
        let rested = Stamina::new(100);
        let tired = Stamina::with_current(0, 100);
        assert!(tired.is_depleted());
        assert_eq!(rested.speed(), 10.0);
        assert_eq!(tired.speed(), 5.0);
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Cell, Transform};

    #[test]
    fn cell_truncates() {
        assert_eq!(Transform::at(3.9, 7.2).cell(), Cell::new(3, 7));
    }

    #[test]
    fn manhattan_between_cells_and_transforms() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(-3, 4)), 7);
        let a = Transform::at(1.5, 2.0);
        let b = Transform::at(0.0, 0.0);
        assert!((a.manhattan(&b) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn signum_clamps_each_axis() {
        assert_eq!(Cell::new(-7, 0).signum(), Cell::new(-1, 0));
        assert_eq!(Cell::new(3, 9).signum(), Cell::new(1, 1));
    }

    #[test]
    fn neighbors_follow_cardinal_order() {
        let n = Cell::new(2, 2).neighbors();
        assert_eq!(n, [Cell::new(3, 2), Cell::new(1, 2), Cell::new(2, 3), Cell::new(2, 1)]);
    }
}

#[cfg(test)]
mod timer {
    use crate::PeriodicTimer;

    #[test]
    fn carrying_timer_keeps_overshoot() {
        let mut t = PeriodicTimer::carrying(1.0);
        assert!(!t.tick(0.6));
        assert!(t.tick(0.6));
        assert!((t.accumulator - 0.2).abs() < 1e-6);
    }

    #[test]
    fn fires_at_most_once_per_frame() {
        let mut t = PeriodicTimer::carrying(1.0);
        assert!(t.tick(3.5));
        // Remaining backlog fires on the next frames, one at a time.
        assert!(t.tick(0.0));
        assert!(t.tick(0.0));
        assert!(!t.tick(0.0));
    }

    #[test]
    fn restarting_timer_resets() {
        let mut t = PeriodicTimer::restarting(0.02);
        assert!(t.tick(0.05));
        assert_eq!(t.accumulator, 0.0);
    }
}

#[cfg(test)]
mod kinds {
    use crate::{ConsumerState, FoodKind, NpcKind, NpcState, PredatorState};

    #[test]
    fn only_predators_prey_on_consumers() {
        assert!(NpcKind::Predator.preys_on(NpcKind::Consumer));
        assert!(!NpcKind::Predator.preys_on(NpcKind::Predator));
        assert!(!NpcKind::Consumer.preys_on(NpcKind::Consumer));
        assert!(!NpcKind::Consumer.preys_on(NpcKind::Predator));
    }

    #[test]
    fn initial_states_are_idle() {
        assert_eq!(NpcKind::Consumer.initial_state(), NpcState::Consumer(ConsumerState::Idle));
        assert_eq!(NpcKind::Predator.initial_state(), NpcState::Predator(PredatorState::Idle));
    }

    #[test]
    fn food_amount() {
        assert_eq!(FoodKind::HealthRestore(10).amount(), 10);
        assert_eq!(FoodKind::StaminaRestore(25).amount(), 25);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, SimRng};

    #[test]
    fn per_agent_determinism() {
        let mut a = AgentRng::new(999, 3);
        let mut b = AgentRng::new(999, 3);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn adjacent_serials_differ() {
        let mut a = AgentRng::new(0, 0);
        let mut b = AgentRng::new(0, 1);
        let xa: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let xb: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xa, xb);
    }

    #[test]
    fn cardinal_index_in_range() {
        let mut r = AgentRng::new(1, 1);
        for _ in 0..100 {
            assert!(r.cardinal_index() < 4);
        }
    }

    #[test]
    fn child_streams_are_deterministic() {
        let mut root_a = SimRng::new(5);
        let mut root_b = SimRng::new(5);
        let mut ca = root_a.child(1);
        let mut cb = root_b.child(1);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }
}

#[cfg(test)]
mod config {
    use crate::WorldConfig;

    #[test]
    fn defaults_validate() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn default_food_interval() {
        let c = WorldConfig::default();
        assert!((c.spawn.food_interval_secs() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_probability() {
        let mut c = WorldConfig::default();
        c.spawn.predator_probability = 1.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let mut c = WorldConfig::default();
        c.attrition.tiredness_interval_secs = 0.0;
        assert!(c.validate().is_err());
    }
}
