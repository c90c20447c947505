//! Unit tests for lem-sim.
//!
//! Golden move logs below were traced by hand against the distribution and
//! priority rules; any change to scoring, selection, distribution, or turn
//! ordering shows up here first.

#[cfg(test)]
mod helpers {
    use lem_colony::{Colony, parse_colony};

    use crate::{NoopObserver, SimBuilder};

    pub fn colony(text: &str) -> Colony {
        parse_colony(text).expect("test map parses")
    }

    /// Build and run with defaults; return the output lines.
    pub fn log_lines(text: &str) -> Vec<String> {
        let colony = colony(text);
        let mut sim = SimBuilder::new(&colony).build().expect("sim builds");
        sim.run(&mut NoopObserver).lines(&colony)
    }

    pub const DIRECT: &str = "\
3
##start
start 0 0
##end
end 1 0
start-end
";

    pub const DIAMOND: &str = "\
4
##start
s 0 0
##end
e 2 0
a 1 1
b 1 -1
s-a
a-e
s-b
b-e
";

    /// `s-a-b-e` in a straight line.
    pub const CORRIDOR_ONE: &str = "\
1
##start
s 0 0
##end
e 3 0
a 1 0
b 2 0
s-a
a-b
b-e
";

    pub const CORRIDOR_FIVE: &str = "\
5
##start
s 0 0
##end
e 3 0
a 1 0
b 2 0
s-a
a-b
b-e
";

    /// Two routes sharing hub `m`, plus an independent route via `c`.
    pub const HUB: &str = "\
3
##start
s 0 0
##end
e 4 0
m 1 0
a 2 1
b 2 -1
c 2 3
s-m
m-a
m-b
a-e
b-e
s-c
c-e
";

    pub const DISCONNECTED: &str = "\
2
##start
s 0 0
##end
e 5 0
a 1 0
b 4 0
s-a
b-e
";

    /// `HUB` with more ants, so all three candidates are selected.
    pub fn hub_with(ants: u32) -> String {
        HUB.replacen('3', &ants.to_string(), 1)
    }
}

// ── Ant state ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ant {
    use lem_core::{AntId, SolverConfig, Turn};

    use crate::{Ant, Cursor};

    #[test]
    fn cursor_advances_from_waiting() {
        let mut ant = Ant::new(AntId(1), 0, 0);
        assert!(!ant.is_departed());
        assert_eq!(ant.next_index(), 0);
        ant.advance();
        assert_eq!(ant.cursor, Cursor::At(0));
        ant.advance();
        assert_eq!(ant.cursor, Cursor::At(1));
        assert!(ant.is_finished(2));
        assert!(!ant.is_finished(3));
    }

    #[test]
    fn readiness_respects_delay() {
        let ant = Ant::new(AntId(1), 0, 2);
        assert!(!ant.is_ready(Turn(1)));
        assert!(ant.is_ready(Turn(2)));

        let mut departed = Ant::new(AntId(2), 0, 5);
        departed.advance();
        assert!(departed.is_ready(Turn::ZERO));
    }

    #[test]
    fn priority_components() {
        let cfg = SolverConfig::default();
        let mut ant = Ant::new(AntId(1), 0, 1);
        assert_eq!(ant.priority(4, Turn(0), &cfg), 0.0);
        assert_eq!(ant.priority(4, Turn(1), &cfg), 0.3);
        ant.advance();
        assert_eq!(ant.priority(4, Turn(1), &cfg), 0.25 + 0.5);
        ant.advance();
        assert_eq!(ant.priority(4, Turn(1), &cfg), 0.5 + 0.5);
    }

    #[test]
    fn departed_outranks_any_waiting_ant() {
        let cfg = SolverConfig::default();
        let mut leaving = Ant::new(AntId(2), 0, 0);
        leaving.advance();
        let waiting = Ant::new(AntId(1), 0, 0);
        assert!(leaving.priority(100, Turn(0), &cfg) > waiting.priority(100, Turn(0), &cfg));
    }
}

// ── Distribution ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod distribute {
    use lem_core::{AntId, SolverConfig};
    use lem_paths::Path;

    use super::helpers::{CORRIDOR_FIVE, DIAMOND, DIRECT, colony};
    use crate::{PathLoad, distribute, path_efficiency};

    fn route(colony: &lem_colony::Colony, names: &[&str]) -> Path {
        Path::new(names.iter().map(|n| colony.room_id(n).unwrap()).collect())
    }

    #[test]
    fn efficiency_values() {
        let cfg = SolverConfig::default();
        let c = colony(DIRECT);
        assert_eq!(path_efficiency(&c, &route(&c, &["start", "end"]), &cfg), 1.0);

        // 0.6 / 3 + 0.4 * (2 / 4)
        let d = colony(DIAMOND);
        let eff = path_efficiency(&d, &route(&d, &["s", "a", "e"]), &cfg);
        assert!((eff - 0.4).abs() < 1e-9);
    }

    #[test]
    fn efficiency_degree_term_saturates() {
        let text = "\
1
##start
s 0 0
##end
e 2 0
h 1 0
x 1 1
y 1 2
z 1 3
w 1 4
s-h
h-e
h-x
h-y
h-z
h-w
";
        let cfg = SolverConfig::default();
        let c = colony(text);
        // degree(h) = 6, clamped to 1.0 after normalising.
        let eff = path_efficiency(&c, &route(&c, &["s", "h", "e"]), &cfg);
        assert!((eff - (0.2 + 0.4)).abs() < 1e-9);
    }

    #[test]
    fn direct_path_batches() {
        let cfg = SolverConfig::default();
        let c = colony(DIRECT);
        let paths = vec![route(&c, &["start", "end"])];
        let ants = distribute(&c, &paths, &cfg);

        let ids: Vec<AntId> = ants.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AntId(1), AntId(2), AntId(3)]);
        assert!(ants.iter().all(|a| a.path == 0 && a.delay == 0));

        // First batch: estimate 1 → 1 ant.  Second: estimate 1 + 0.5 · 2 = 2.
        let load = PathLoad::new(&c, &paths[0], &cfg);
        assert_eq!(load.batch(load.estimate(3, &cfg), 3), 1);
        let load = PathLoad { ants: 1, ..load };
        assert!((load.estimate(2, &cfg) - 2.0).abs() < 1e-9);
        assert_eq!(load.batch(load.estimate(2, &cfg), 2), 2);
    }

    #[test]
    fn diamond_splits_evenly() {
        let cfg = SolverConfig::default();
        let c = colony(DIAMOND);
        let paths = vec![route(&c, &["s", "a", "e"]), route(&c, &["s", "b", "e"])];
        let ants = distribute(&c, &paths, &cfg);

        let assignment: Vec<(u32, usize, u32)> =
            ants.iter().map(|a| (a.id.0, a.path, a.delay)).collect();
        assert_eq!(assignment, vec![(1, 0, 0), (2, 0, 0), (3, 1, 0), (4, 1, 0)]);
    }

    #[test]
    fn loaded_path_estimate() {
        let cfg = SolverConfig::default();
        let c = colony(DIAMOND);
        let p = route(&c, &["s", "a", "e"]);
        let load = PathLoad { ants: 2, ..PathLoad::new(&c, &p, &cfg) };
        // 2 + 2 · 0.8 · 0.6 + (1 - 0) · 2 · 0.5
        assert!((load.estimate(2, &cfg) - 3.96).abs() < 1e-9);
    }

    #[test]
    fn later_batch_positions_get_delays() {
        let cfg = SolverConfig::default();
        let c = colony(CORRIDOR_FIVE);
        let paths = vec![route(&c, &["s", "a", "b", "e"])];
        let ants = distribute(&c, &paths, &cfg);

        // Batches of 2 then 3; position 2 of the second batch waits
        // floor(2 · 0.65 · 1.5) = 1 turn.
        let delays: Vec<u32> = ants.iter().map(|a| a.delay).collect();
        assert_eq!(delays, vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn delay_is_capped_by_path_edges() {
        let cfg = SolverConfig { delay_factor: 100.0, ..SolverConfig::default() };
        let c = colony(CORRIDOR_FIVE);
        let p = route(&c, &["s", "a", "b", "e"]);
        let load = PathLoad::new(&c, &p, &cfg);
        assert_eq!(load.delay(0, &cfg), 0);
        assert_eq!(load.delay(4, &cfg), 2);
    }

    #[test]
    fn stops_when_no_path_takes_a_batch() {
        // Efficiency far above 1 makes every batch size floor to zero.
        let cfg = SolverConfig { efficiency_length_weight: 10.0, ..SolverConfig::default() };
        let c = colony(CORRIDOR_FIVE);
        let paths = vec![route(&c, &["s", "a", "b", "e"])];
        assert!(distribute(&c, &paths, &cfg).is_empty());
    }

    #[test]
    fn every_ant_assigned_once() {
        let cfg = SolverConfig::default();
        let c = colony(&super::helpers::hub_with(40));
        let paths = vec![
            route(&c, &["s", "c", "e"]),
            route(&c, &["s", "m", "a", "e"]),
            route(&c, &["s", "m", "b", "e"]),
        ];
        let ants = distribute(&c, &paths, &cfg);
        assert_eq!(ants.len(), 40);
        for (i, ant) in ants.iter().enumerate() {
            assert_eq!(ant.id, AntId(i as u32 + 1));
            assert!(ant.path < paths.len());
            assert!(ant.delay < paths[ant.path].edge_count() as u32);
        }
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use lem_colony::parse_colony;

    use super::helpers::{
        CORRIDOR_FIVE, CORRIDOR_ONE, DIAMOND, DIRECT, DISCONNECTED, HUB, colony, log_lines,
    };
    use crate::{NoopObserver, SimBuilder, SimError};

    #[test]
    fn direct_path_moves_every_ant_at_once() {
        assert_eq!(log_lines(DIRECT), vec!["L1-end L2-end L3-end"]);
    }

    #[test]
    fn diamond_uses_both_routes() {
        assert_eq!(
            log_lines(DIAMOND),
            vec!["L1-a L3-b", "L1-end L3-end L2-a L4-b", "L2-end L4-end"]
        );
    }

    #[test]
    fn single_ant_corridor() {
        assert_eq!(log_lines(CORRIDOR_ONE), vec!["L1-a", "L1-b", "L1-e"]);
    }

    #[test]
    fn corridor_pipelines_ants() {
        assert_eq!(
            log_lines(CORRIDOR_FIVE),
            vec![
                "L1-a",
                "L1-b L2-a",
                "L1-e L2-b L3-a",
                "L2-e L3-b L4-a",
                "L3-e L4-b L5-a",
                "L4-e L5-b",
                "L5-e",
            ]
        );
    }

    #[test]
    fn hub_prefers_independent_route_first() {
        // Selected: s-c-e then s-m-a-e; ants 1,2 on the first, 3 on the second.
        assert_eq!(
            log_lines(HUB),
            vec!["L1-c L3-m", "L1-e L3-a L2-c", "L3-e L2-e"]
        );
    }

    #[test]
    fn missing_end_is_a_format_error() {
        let err = parse_colony("2\n##start\ns 0 0\ne 1 0\ns-e\n").unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn disconnected_is_a_topology_error() {
        let c = colony(DISCONNECTED);
        let err = SimBuilder::new(&c).build().err().expect("unreachable end");
        assert!(matches!(err, SimError::Path(_)));
        assert!(err.is_topology_error());
    }

    #[test]
    fn invalid_config_is_rejected_before_search() {
        let c = colony(DIAMOND);
        let cfg = lem_core::SolverConfig { overlap_divisor: 0, ..Default::default() };
        let err = SimBuilder::new(&c).config(cfg).build().err().expect("bad config");
        assert!(matches!(err, SimError::Config(_)));
        assert!(!err.is_topology_error());
    }

    #[test]
    fn extreme_coordinates_route_normally() {
        let map = "1\n##start\ns -9223372036854775808 0\n##end\ne 9223372036854775807 0\n\
                   a 0 5\ns-a\na-e\n";
        assert_eq!(log_lines(map), vec!["L1-a", "L1-e"]);
    }

    #[test]
    fn runs_are_idempotent() {
        for map in [DIRECT, DIAMOND, HUB, CORRIDOR_FIVE] {
            assert_eq!(log_lines(map), log_lines(map));
        }
    }

    #[test]
    fn sim_reports_finished_state() {
        let c = colony(DIAMOND);
        let mut sim = SimBuilder::new(&c).build().unwrap();
        assert!(!sim.is_finished());
        let log = sim.run(&mut NoopObserver);
        assert!(sim.is_finished());
        assert_eq!(log.move_count(), 8);
        // Departure turn plus three logged turns.
        assert_eq!(sim.turn().0, 4);
        assert_eq!(sim.step(), None);
    }
}

// ── Turn-level invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use rustc_hash::FxHashMap;

    use lem_colony::Colony;
    use lem_core::{RoomId, SolverConfig, Turn};
    use lem_paths::{Path, PathFinder, PathResult};

    use super::helpers::{colony, hub_with};
    use crate::{Cursor, NoopObserver, SimBuilder};

    #[test]
    fn interior_rooms_hold_at_most_one_ant() {
        let c = colony(&hub_with(25));
        let mut sim = SimBuilder::new(&c).build().unwrap();
        assert_eq!(sim.paths().len(), 3);

        let mut previous: Vec<Cursor> = sim.ants().iter().map(|a| a.cursor).collect();
        while let Some(moves) = sim.step() {
            let mut counts: FxHashMap<RoomId, u32> = FxHashMap::default();
            for ant in sim.ants() {
                if let Some(room) = sim.room_of(ant) {
                    if !c.is_terminal(room) {
                        *counts.entry(room).or_default() += 1;
                    }
                }
            }
            assert!(counts.values().all(|&n| n == 1), "shared room after {moves:?}");

            // Cursors only move forward, one step at a time.
            for (ant, before) in sim.ants().iter().zip(&previous) {
                match (*before, ant.cursor) {
                    (a, b) if a == b => {}
                    (Cursor::Waiting, Cursor::At(0)) => {}
                    (Cursor::At(i), Cursor::At(j)) => assert_eq!(j, i + 1),
                    (a, b) => panic!("illegal transition {a:?} -> {b:?}"),
                }
            }
            previous = sim.ants().iter().map(|a| a.cursor).collect();

            // Each ant appears at most once per turn.
            let mut seen = moves.iter().map(|m| m.ant).collect::<Vec<_>>();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), moves.len());
        }
        assert!(sim.is_finished());
    }

    #[test]
    fn moves_never_record_the_start_room() {
        let c = colony(&hub_with(10));
        let mut sim = SimBuilder::new(&c).build().unwrap();
        while let Some(moves) = sim.step() {
            assert!(moves.iter().all(|m| m.room != c.start()));
        }
    }

    /// Two eight-room routes through `x` and `y` in opposite directions.
    const CROSSING: &str = "\
2
##start
s 0 0
##end
e 10 0
p1 1 2
p2 2 2
x 4 0
y 6 0
p3 8 2
p4 9 2
q1 1 -2
q2 2 -2
q3 8 -2
q4 9 -2
s-p1
p1-p2
p2-x
x-y
y-p3
p3-p4
p4-e
s-q1
q1-q2
q2-y
x-q3
q3-q4
q4-e
";

    /// Offers exactly the two crossing routes.
    struct Crossing;

    impl PathFinder for Crossing {
        fn find_paths(&self, colony: &Colony) -> PathResult<Vec<Path>> {
            let route = |names: &[&str]| {
                Path::new(names.iter().map(|n| colony.room_id(n).unwrap()).collect())
            };
            Ok(vec![
                route(&["s", "p1", "p2", "x", "y", "p3", "p4", "e"]),
                route(&["s", "q1", "q2", "y", "x", "q3", "q4", "e"]),
            ])
        }
    }

    #[test]
    fn crossing_routes_stall_and_stop() {
        let c = colony(CROSSING);
        // A degree-heavy efficiency sizes every batch to one ant, so each
        // route gets one.
        let cfg = SolverConfig { efficiency_degree_weight: 1.0, ..SolverConfig::default() };
        let mut sim = SimBuilder::new(&c).config(cfg).finder(Crossing).build().unwrap();
        assert_eq!(sim.paths().len(), 2);
        let routes: Vec<usize> = sim.ants().iter().map(|a| a.path).collect();
        assert_eq!(routes, vec![0, 1]);

        let log = sim.run(&mut NoopObserver);

        // Both ants reach the crossing on the third logged turn, then block
        // each other.
        assert_eq!(log.len(), 3);
        assert!(!sim.is_finished());
        assert_eq!(sim.turn(), Turn(4));
        assert_eq!(sim.step(), None);

        let x = c.room_id("x").unwrap();
        let y = c.room_id("y").unwrap();
        let held: Vec<Option<RoomId>> = sim.ants().iter().map(|a| sim.room_of(a)).collect();
        assert_eq!(held, vec![Some(x), Some(y)]);
    }

    #[test]
    fn every_ant_arrives_once() {
        let c = colony(&hub_with(12));
        let mut sim = SimBuilder::new(&c).build().unwrap();
        let log = sim.run(&mut crate::NoopObserver);
        let arrivals = log
            .turns
            .iter()
            .flat_map(|t| &t.moves)
            .filter(|m| m.room == c.end())
            .count();
        assert_eq!(arrivals, 12);
    }
}

// ── Builder and observer plumbing ─────────────────────────────────────────────

#[cfg(test)]
mod plumbing {
    use lem_colony::Colony;
    use lem_core::Turn;
    use lem_paths::{Path, PathFinder, PathResult};

    use super::helpers::{DIAMOND, colony};
    use crate::{Move, SimBuilder, SimObserver};

    /// Always offers the `b` route only.
    struct OnlyB;

    impl PathFinder for OnlyB {
        fn find_paths(&self, colony: &Colony) -> PathResult<Vec<Path>> {
            let ids = ["s", "b", "e"].map(|n| colony.room_id(n).unwrap());
            Ok(vec![Path::new(ids.to_vec())])
        }
    }

    #[test]
    fn custom_finder_is_used() {
        let c = colony(DIAMOND);
        let mut sim = SimBuilder::new(&c).finder(OnlyB).build().unwrap();
        assert_eq!(sim.paths().len(), 1);
        let lines = sim.run(&mut crate::NoopObserver).lines(&c);
        assert!(lines.iter().all(|l| !l.contains("-a")));
        assert!(lines.iter().any(|l| l.contains("L4-e")));
    }

    #[derive(Default)]
    struct Recorder {
        started: u32,
        logged:  Vec<(Turn, usize)>,
        ended:   Option<(Turn, usize)>,
    }

    impl SimObserver for Recorder {
        fn on_turn_start(&mut self, _turn: Turn) {
            self.started += 1;
        }
        fn on_turn_end(&mut self, turn: Turn, moves: &[Move], _colony: &Colony) {
            self.logged.push((turn, moves.len()));
        }
        fn on_sim_end(&mut self, final_turn: Turn, logged_turns: usize) {
            self.ended = Some((final_turn, logged_turns));
        }
    }

    #[test]
    fn observer_sees_logged_turns_only() {
        let c = colony(DIAMOND);
        let mut sim = SimBuilder::new(&c).build().unwrap();
        let mut rec = Recorder::default();
        let log = sim.run(&mut rec);

        // Four moving turns plus the final idle attempt.
        assert_eq!(rec.started, 5);
        assert_eq!(rec.logged, vec![(Turn(1), 2), (Turn(2), 4), (Turn(3), 2)]);
        assert_eq!(rec.ended, Some((Turn(4), 3)));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn move_tokens_render_room_names() {
        let c = colony(DIAMOND);
        let mv = Move { ant: lem_core::AntId(7), room: c.room_id("b").unwrap() };
        assert_eq!(mv.token(&c), "L7-b");
        assert_eq!(mv.display(&c).to_string(), "L7-b");
    }
}
