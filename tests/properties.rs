use std::time::Duration;
use std::time::Instant;

use game_of_life::controller;
use game_of_life::grid::Grid;
use game_of_life::intent::Intent;
use game_of_life::neighbors::count_live_neighbors;
use game_of_life::rule_set::B3S23;
use game_of_life::scheduler::TickScheduler;
use game_of_life::simulation::Simulation;
use game_of_life::simulation::SimulationState;
use game_of_life::step::step;
use proptest::prelude::*;

prop_compose! {
    fn any_grid(max: usize)(w in 1..=max, h in 1..=max)
        (cells in prop::collection::vec(any::<bool>(), w * h), w in Just(w), h in Just(h)) -> Grid {
        let mut grid = Grid::new(w, h);
        for (i, alive) in cells.into_iter().enumerate() {
            grid.set(i % w, i / w, alive);
        }

        grid
    }
}

fn full(w: usize, h: usize) -> Grid {
    let mut grid = Grid::new(w, h);
    for y in 0..h {
        for x in 0..w {
            grid.set(x, y, true);
        }
    }

    grid
}

proptest! {
    #[test]
    fn step_preserves_dimensions(grid in any_grid(24)) {
        let next = step(&grid);

        prop_assert_eq!(next.width(), grid.width());
        prop_assert_eq!(next.height(), grid.height());
    }

    #[test]
    fn step_follows_rule_on_snapshot(grid in any_grid(16)) {
        let next = step(&grid);

        for (x, y, alive) in grid.iter() {
            let n = count_live_neighbors(&grid, x, y);
            prop_assert_eq!(next.get(x, y), B3S23.next_state(alive, n), "cell ({}, {})", x, y);
        }
    }

    #[test]
    fn neighbor_count_in_range(grid in any_grid(16)) {
        for (x, y, _) in grid.iter() {
            prop_assert!(count_live_neighbors(&grid, x, y) <= 8);
        }
    }

    #[test]
    fn empty_is_fixed_point(w in 1..40usize, h in 1..40usize) {
        let grid = Grid::new(w, h);

        prop_assert_eq!(step(&grid), grid);
    }

    #[test]
    fn block_is_fixed_point((w, h, x, y) in (4..24usize, 4..24usize)
        .prop_flat_map(|(w, h)| (Just(w), Just(h), 1..w - 2, 1..h - 2))) {
        let mut block = Grid::new(w, h);
        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            block.set(x + dx, y + dy, true);
        }

        prop_assert_eq!(step(&block), block);
    }

    #[test]
    fn blinker_has_period_two((w, h, x, y) in (3..24usize, 3..24usize)
        .prop_flat_map(|(w, h)| (Just(w), Just(h), 1..w - 1, 1..h - 1))) {
        let mut blinker = Grid::new(w, h);
        for dx in [0, 1, 2] {
            blinker.set(x + dx - 1, y, true);
        }

        let next = step(&blinker);

        prop_assert_ne!(&next, &blinker);
        prop_assert_eq!(step(&next), blinker);
    }

    #[test]
    fn full_grid_counts(w in 3..24usize, h in 3..24usize) {
        let grid = full(w, h);

        prop_assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        prop_assert_eq!(count_live_neighbors(&grid, w - 1, h - 1), 3);
        prop_assert_eq!(count_live_neighbors(&grid, w / 2, h / 2), 8);
    }

    #[test]
    fn toggle_in_bounds(grid in any_grid(16), paused in any::<bool>(), seed in any::<(usize, usize)>()) {
        let (x, y) = (seed.0 % grid.width(), seed.1 % grid.height());
        let mut state = SimulationState::new(grid.clone());
        if !paused {
            controller::toggle_pause(&mut state);
        }

        controller::toggle_cell_at(&mut state, x, y);

        prop_assert!(state.is_paused());
        for (cx, cy, alive) in grid.iter() {
            let want = if (cx, cy) == (x, y) { !alive } else { alive };
            prop_assert_eq!(state.grid().get(cx, cy), want);
        }
    }

    #[test]
    fn toggle_out_of_bounds(grid in any_grid(16), paused in any::<bool>(), dx in 0..100usize, y in 0..100usize) {
        let mut state = SimulationState::new(grid.clone());
        if !paused {
            controller::toggle_pause(&mut state);
        }

        controller::toggle_cell_at(&mut state, grid.width() + dx, y);

        prop_assert_eq!(state.is_paused(), paused);
        prop_assert_eq!(state.grid(), &grid);
    }

    #[test]
    fn clear_keeps_pause(grid in any_grid(16), paused in any::<bool>()) {
        let mut state = SimulationState::new(grid);
        if !paused {
            controller::toggle_pause(&mut state);
        }

        controller::clear(&mut state);

        prop_assert_eq!(state.grid().population(), 0);
        prop_assert_eq!(state.is_paused(), paused);
    }

    #[test]
    fn polls_within_delay_step_at_most_once(delay in 1..1_000u64, first in 0..5_000u64, gap in 0..1_000u64) {
        let delay = Duration::from_millis(delay);
        let gap = Duration::from_millis(gap).min(delay - Duration::from_millis(1));

        let t0 = Instant::now();
        let mut sched = TickScheduler::new(delay, t0);

        let a = t0 + Duration::from_millis(first);
        let steps = [a, a + gap].into_iter().filter(|&t| sched.poll(t)).count();

        prop_assert!(steps <= 1);
    }
}

#[test]
fn host_loop_runs_a_blinker() {
    let mut grid = Grid::new(5, 5);
    for x in 1..=3 {
        grid.set(x, 2, true);
    }

    let t0 = Instant::now();
    let delay = Duration::from_millis(100);
    let mut sim = Simulation::new(grid.clone(), delay, t0);

    // resume, then poll every 30ms for a second. Each step rebases the schedule to the poll that
    // made it, so steps land on 120ms, 240ms, ..., 960ms: eight of them, not nine.
    let mut steps = 0;
    for i in 0..=33u32 {
        let intents = if i == 0 {
            vec![Intent::TogglePause]
        } else {
            vec![]
        };

        let generation = sim.state().generation();
        assert!(sim.tick(intents, t0 + Duration::from_millis(30) * i).is_continue());
        steps += sim.state().generation() - generation;
    }

    assert_eq!(steps, 8);
    assert_eq!(sim.state().generation(), 8);
    assert_eq!(sim.grid(), &grid);
}
