//! Unit tests for meadow-behavior.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use meadow_core::{
        BehaviorConfig, Cell, FoodKind, Health, NpcKind, SpriteId, Stamina, Transform,
    };
    use meadow_grid::TileGrid;
    use meadow_store::{FoodTable, HeroSpawn, HeroTable, NpcSpawn, NpcTable, Restrictor};

    use crate::{Activity, AgentCtx, DecisionStrategy};

    pub struct Fixture {
        pub npcs:   NpcTable,
        pub heroes: HeroTable,
        pub food:   FoodTable,
        pub config: BehaviorConfig,
        pub grid:   Restrictor,
    }

    impl Fixture {
        pub fn room(w: usize, h: usize) -> Self {
            Self::with_grid(TileGrid::walled_room(w, h).unwrap())
        }

        pub fn rows(rows: &[&str]) -> Self {
            Self::with_grid(TileGrid::from_rows(rows).unwrap())
        }

        fn with_grid(grid: TileGrid) -> Self {
            Self {
                npcs:   NpcTable::new(17),
                heroes: HeroTable::new(),
                food:   FoodTable::new(),
                config: BehaviorConfig::default(),
                grid:   Arc::new(grid),
            }
        }

        pub fn npc(&mut self, kind: NpcKind, x: i32, y: i32, health: i32, stamina: i32) -> usize {
            self.npcs.spawn(NpcSpawn {
                sprite:     SpriteId(0),
                transform:  Transform::on_cell(Cell::new(x, y)),
                health:     Health::with_current(health, 100),
                stamina:    Stamina::with_current(stamina, 100),
                restrictor: Arc::clone(&self.grid),
                kind,
            })
        }

        pub fn consumer(&mut self, x: i32, y: i32, health: i32, stamina: i32) -> usize {
            self.npc(NpcKind::Consumer, x, y, health, stamina)
        }

        pub fn predator(&mut self, x: i32, y: i32, health: i32) -> usize {
            self.npc(NpcKind::Predator, x, y, health, 100)
        }

        pub fn hero(&mut self, x: i32, y: i32) -> usize {
            self.heroes.spawn(HeroSpawn {
                sprite:     SpriteId(1),
                transform:  Transform::on_cell(Cell::new(x, y)),
                health:     Health::new(100),
                stamina:    Stamina::new(100),
                restrictor: Arc::clone(&self.grid),
                camera:     None,
            })
        }

        pub fn food(&mut self, x: i32, y: i32) -> usize {
            self.food.spawn(SpriteId(2), Transform::on_cell(Cell::new(x, y)), FoodKind::HealthRestore(10))
        }

        pub fn decide(&mut self, strategy: &dyn DecisionStrategy, npc: usize) -> Activity {
            let mut ctx = AgentCtx::new(&mut self.npcs, &self.heroes, &self.food, &self.config);
            ctx.at(npc);
            strategy.decide(&mut ctx)
        }

        pub fn cell(&self, npc: usize) -> Cell {
            self.npcs.transform[npc].cell()
        }
    }
}

// ── Tree nodes ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tree_nodes {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::helpers::Fixture;
    use crate::{AgentCtx, Node, Status};

    fn counted(status: Status, hits: &Arc<AtomicUsize>) -> Node {
        let hits = Arc::clone(hits);
        Node::task(move |_ctx| {
            hits.fetch_add(1, Ordering::SeqCst);
            status
        })
    }

    fn tick(node: &Node) -> Status {
        let mut fx = Fixture::room(5, 5);
        let npc = fx.consumer(2, 2, 50, 50);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        ctx.at(npc);
        node.tick(&mut ctx)
    }

    #[test]
    fn leaves() {
        assert_eq!(tick(&Node::condition(|_| true)), Status::Success);
        assert_eq!(tick(&Node::condition(|_| false)), Status::Failure);
        assert_eq!(tick(&Node::action(|_| {})), Status::Success);
        assert_eq!(tick(&Node::task(|_| Status::Running)), Status::Running);
    }

    #[test]
    fn sequence_stops_at_first_non_success() {
        let later = Arc::new(AtomicUsize::new(0));
        let seq = Node::sequence([
            Node::condition(|_| true),
            Node::condition(|_| false),
            counted(Status::Success, &later),
        ]);
        assert_eq!(tick(&seq), Status::Failure);
        assert_eq!(later.load(Ordering::SeqCst), 0);

        let running = Node::sequence([Node::task(|_| Status::Running), counted(Status::Success, &later)]);
        assert_eq!(tick(&running), Status::Running);
        assert_eq!(later.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_composites() {
        assert_eq!(tick(&Node::sequence(Vec::new())), Status::Success);
        assert_eq!(tick(&Node::selector(Vec::new())), Status::Failure);
    }

    #[test]
    fn selector_returns_first_success_or_running() {
        let later = Arc::new(AtomicUsize::new(0));
        let sel = Node::selector([
            Node::condition(|_| false),
            Node::task(|_| Status::Running),
            counted(Status::Success, &later),
        ]);
        assert_eq!(tick(&sel), Status::Running);
        assert_eq!(later.load(Ordering::SeqCst), 0);

        let all_fail = Node::selector([Node::condition(|_| false), counted(Status::Failure, &later)]);
        assert_eq!(tick(&all_fail), Status::Failure);
        assert_eq!(later.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn inverter_flips_and_passes_running() {
        assert_eq!(tick(&Node::inverter(Node::condition(|_| true))), Status::Failure);
        assert_eq!(tick(&Node::inverter(Node::condition(|_| false))), Status::Success);
        assert_eq!(tick(&Node::inverter(Node::task(|_| Status::Running))), Status::Running);
    }

    #[test]
    fn leaves_see_the_agent() {
        let node = Node::condition(|ctx| ctx.npcs.health[ctx.npc].current == 50);
        assert_eq!(tick(&node), Status::Success);
    }

    #[test]
    fn node_count_covers_subtree() {
        let tree = Node::selector([
            Node::sequence([Node::condition(|_| true), Node::action(|_| {})]),
            Node::inverter(Node::action(|_| {})),
        ]);
        assert_eq!(tree.node_count(), 6);
    }
}

// ── Targeting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod targeting {
    use meadow_core::Cell;

    use super::helpers::Fixture;
    use crate::AgentCtx;
    use crate::targeting::{is_hungry, nearest_food, nearest_mate, nearest_prey, nearest_threat};

    #[test]
    fn threat_radius_is_strict() {
        let mut fx = Fixture::room(20, 20);
        let me = fx.consumer(5, 5, 50, 50);
        fx.predator(10, 5, 50); // exactly 5 away
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        assert_eq!(nearest_threat(ctx.at(me)), None);
    }

    #[test]
    fn nearest_threat_wins() {
        let mut fx = Fixture::room(20, 20);
        let me = fx.consumer(5, 5, 50, 50);
        fx.predator(8, 5, 50);
        fx.predator(5, 7, 50);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        assert_eq!(nearest_threat(ctx.at(me)), Some(Cell::new(5, 7)));
    }

    #[test]
    fn queued_rows_are_never_targets() {
        let mut fx = Fixture::room(20, 20);
        let hunter = fx.predator(5, 5, 50);
        let prey = fx.consumer(6, 5, 50, 50);
        let hero = fx.hero(9, 5);
        fx.npcs.removals.mark(prey);
        fx.heroes.removals.mark(hero);
        let f = fx.food(4, 4);
        fx.food.removals.mark(f);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        ctx.at(hunter);
        assert_eq!(nearest_prey(&ctx), None);
        assert_eq!(nearest_food(&ctx), None);
    }

    #[test]
    fn hero_is_prey() {
        let mut fx = Fixture::room(20, 20);
        let hunter = fx.predator(5, 5, 50);
        fx.consumer(12, 5, 50, 50); // out of range
        fx.hero(5, 9);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        assert_eq!(nearest_prey(ctx.at(hunter)), Some(Cell::new(5, 9)));
    }

    #[test]
    fn mates_are_same_kind_and_eligible() {
        let mut fx = Fixture::room(20, 20);
        let me = fx.consumer(5, 5, 90, 100);
        fx.predator(6, 5, 95);
        fx.consumer(5, 6, 80, 100); // not above threshold
        fx.consumer(8, 8, 85, 100);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        assert_eq!(nearest_mate(ctx.at(me)), Some(Cell::new(8, 8)));
    }

    #[test]
    fn hunger_uses_either_resource() {
        let mut fx = Fixture::room(10, 10);
        let fed = fx.consumer(1, 1, 50, 50);
        let weak = fx.consumer(1, 1, 49, 100);
        let tired = fx.consumer(1, 1, 100, 49);
        let mut ctx = AgentCtx::new(&mut fx.npcs, &fx.heroes, &fx.food, &fx.config);
        assert!(!is_hungry(ctx.at(fed)));
        assert!(is_hungry(ctx.at(weak)));
        assert!(is_hungry(ctx.at(tired)));
    }
}

// ── Strategies ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use meadow_core::{Cell, ConsumerState, NpcState, PredatorState};

    use super::helpers::Fixture;
    use crate::{Activity, DecisionStrategy, FsmStrategy, TreeStrategy};

    fn both() -> [Box<dyn DecisionStrategy>; 2] {
        [Box::new(TreeStrategy::new()), Box::new(FsmStrategy::new())]
    }

    #[test]
    fn flee_outranks_mating_and_hunger() {
        for strategy in both() {
            let mut fx = Fixture::room(20, 20);
            // Eligible to mate (health 90), hungry (stamina 10), threatened.
            let me = fx.consumer(5, 5, 90, 10);
            fx.consumer(6, 6, 90, 100);
            fx.food(4, 5);
            fx.predator(7, 5, 50);

            let activity = fx.decide(strategy.as_ref(), me);
            assert_eq!(activity, Activity::Fleeing, "{}", strategy.name());
            assert_eq!(fx.cell(me), Cell::new(4, 5), "{}", strategy.name());
            assert_eq!(fx.npcs.data[me].target, Some(Cell::new(7, 5)));
        }
    }

    #[test]
    fn blocked_flee_tries_single_axis_alternatives() {
        for strategy in both() {
            // Predator diagonally below-right; the diagonal away and (x+dir.y, y)
            // are walls, so the consumer ends up at (x, y+dir.x).
            let mut fx = Fixture::rows(&[
                "######",
                "##...#",
                "##...#",
                "#....#",
                "######",
            ]);
            let me = fx.consumer(2, 2, 50, 100);
            fx.predator(3, 3, 50);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::Fleeing);
            assert_eq!(fx.cell(me), Cell::new(2, 1), "{}", strategy.name());
        }
    }

    #[test]
    fn predator_hunts_before_mating() {
        for strategy in both() {
            let mut fx = Fixture::room(20, 20);
            let me = fx.predator(5, 5, 95);
            fx.predator(5, 6, 95);
            fx.hero(8, 5);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::Hunting);
            assert_eq!(fx.cell(me).manhattan(Cell::new(8, 5)), 2, "{}", strategy.name());
        }
    }

    #[test]
    fn eligible_predator_without_prey_seeks_mate() {
        for strategy in both() {
            let mut fx = Fixture::room(20, 20);
            let me = fx.predator(3, 3, 95);
            fx.predator(3, 8, 95);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::SeekingMate);
            assert_eq!(fx.cell(me), Cell::new(3, 4), "{}", strategy.name());
        }
    }

    #[test]
    fn food_route_avoids_predator_cells() {
        for strategy in both() {
            // Two routes from (1,2) to (5,2); the predator blocks the upper one's
            // only gap, and sits out of threat range.
            let mut fx = Fixture::rows(&[
                "###########",
                "#.........#",
                "#.#######.#",
                "#.........#",
                "###########",
            ]);
            let me = fx.consumer(1, 2, 50, 10);
            fx.food(9, 2);
            fx.predator(7, 1, 50);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::SeekingFood);
            assert_eq!(fx.cell(me), Cell::new(1, 3), "{}", strategy.name());
        }
    }

    #[test]
    fn unreachable_food_falls_back_to_random_step() {
        for strategy in both() {
            let mut fx = Fixture::rows(&[
                "#######",
                "#..#..#",
                "#..#..#",
                "#######",
            ]);
            let me = fx.consumer(1, 1, 30, 30);
            fx.food(5, 1);
            let before = fx.cell(me);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::SeekingFood);
            let after = fx.cell(me);
            assert!(after == before || (after.manhattan(before) == 1 && fx.grid.can_pass(after)));
        }
    }

    #[test]
    fn arrived_seeker_holds_position() {
        for strategy in both() {
            let mut fx = Fixture::room(10, 10);
            let me = fx.consumer(4, 4, 90, 100);
            fx.consumer(4, 4, 90, 100);
            assert_eq!(fx.decide(strategy.as_ref(), me), Activity::SeekingMate);
            assert_eq!(fx.cell(me), Cell::new(4, 4));
        }
    }

    #[test]
    fn idle_wanders_at_most_one_cell() {
        for strategy in both() {
            let mut fx = Fixture::room(10, 10);
            let me = fx.consumer(4, 4, 70, 70);
            for _ in 0..50 {
                let before = fx.cell(me);
                assert_eq!(fx.decide(strategy.as_ref(), me), Activity::Idle);
                assert!(fx.cell(me).manhattan(before) <= 1);
                assert!(fx.grid.can_pass(fx.cell(me)));
            }
        }
    }

    #[test]
    fn fsm_records_state_and_resets_target_on_change() {
        let fsm = FsmStrategy::new();
        let mut fx = Fixture::room(20, 20);
        let me = fx.consumer(5, 5, 70, 100);
        fx.npcs.data[me].target = Some(Cell::new(1, 1));

        fx.decide(&fsm, me);
        assert_eq!(fx.npcs.data[me].state, NpcState::Consumer(ConsumerState::Idle));
        // Idle → Idle keeps whatever was cached.
        assert_eq!(fx.npcs.data[me].target, Some(Cell::new(1, 1)));

        fx.npcs.stamina[me].current = 10;
        fx.food(15, 15);
        fx.decide(&fsm, me);
        assert_eq!(fx.npcs.data[me].state, NpcState::Consumer(ConsumerState::SeekingFood));
        assert_eq!(fx.npcs.data[me].target, Some(Cell::new(15, 15)));

        let hunter = fx.predator(18, 1, 50);
        fx.decide(&fsm, hunter);
        assert_eq!(fx.npcs.data[hunter].state, NpcState::Predator(PredatorState::Idle));
    }

    #[test]
    fn tree_leaves_state_tag_alone() {
        let tree = TreeStrategy::new();
        let mut fx = Fixture::room(20, 20);
        let me = fx.consumer(5, 5, 50, 100);
        fx.predator(6, 5, 50);
        fx.decide(&tree, me);
        assert_eq!(fx.npcs.data[me].state, NpcState::Consumer(ConsumerState::Idle));
    }

    #[test]
    fn strategies_trace_identical_trajectories() {
        fn populate(fx: &mut Fixture) {
            for i in 0..12 {
                fx.consumer(1 + i, 2 + (i % 5), 40 + i * 5, 30 + i * 6);
            }
            for i in 0..4 {
                fx.predator(3 + i * 4, 12, 70 + i * 8);
            }
            fx.hero(10, 10);
            for i in 0..6 {
                fx.food(2 + i * 2, 15);
            }
        }

        let mut a = Fixture::room(18, 18);
        let mut b = Fixture::room(18, 18);
        populate(&mut a);
        populate(&mut b);
        let tree = TreeStrategy::new();
        let fsm = FsmStrategy::new();

        for tick in 0..100 {
            for npc in 0..a.npcs.len() {
                let ta = a.decide(&tree, npc);
                let tb = b.decide(&fsm, npc);
                assert_eq!(ta, tb, "tick {tick} npc {npc}");
                assert_eq!(a.cell(npc), b.cell(npc), "tick {tick} npc {npc}");
            }
        }
    }
}
