use std::ops::ControlFlow;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use crate::Pixel;
use crate::controller;
use crate::grid::Grid;
use crate::intent::Intent;
use crate::rule_set::RuleSet;
use crate::scheduler::TickScheduler;
use crate::step::step_with;

/// Everything the host draws: the current generation and whether it is paused.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub(crate) grid: Grid,

    pub(crate) paused: bool,

    /// Set by manual edits, reset by the next generation step
    pub(crate) dirty: bool,

    /// Generation steps since start, or since the last clear
    pub(crate) generation: u64,
}

impl SimulationState {
    /// Wrap `grid` in a paused simulation
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            paused: true,
            dirty: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the grid with its next generation
    fn advance(&mut self, rule: &RuleSet) {
        self.grid = step_with(&self.grid, rule);
        self.generation += 1;
        self.dirty = false;
    }
}

/// A simulation together with its clock. The host calls [`Simulation::tick`] once per loop
/// iteration and draws [`Simulation::grid`] afterwards.
pub struct Simulation {
    state: SimulationState,
    scheduler: TickScheduler,
    rule: RuleSet,

    /// Side length of a cell, in pixels, used to resolve [`Intent::ToggleCellAtPixel`]
    block_size: Pixel,
}

impl Simulation {
    pub fn new(grid: Grid, delay: Duration, now: Instant) -> Self {
        Self {
            state: SimulationState::new(grid),
            scheduler: TickScheduler::new(delay, now),
            rule: RuleSet::default(),
            block_size: 1,
        }
    }

    pub fn with_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_block_size(mut self, block_size: Pixel) -> Self {
        assert!(block_size > 0, "block size must be positive");

        self.block_size = block_size;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    /// Apply a single intent
    pub fn apply(&mut self, intent: Intent) -> ControlFlow<()> {
        match intent {
            Intent::Quit => return ControlFlow::Break(()),
            Intent::TogglePause => controller::toggle_pause(&mut self.state),
            Intent::ClearGrid => controller::clear(&mut self.state),
            Intent::ToggleCellAtPixel { x, y } => {
                controller::toggle_cell_at_pixel(&mut self.state, x, y, self.block_size)
            }
        }

        ControlFlow::Continue(())
    }

    /// Step the grid if the scheduler says a tick is due and the simulation is running. Returns
    /// whether a new generation was produced.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) || self.state.paused {
            return false;
        }

        self.state.advance(&self.rule);

        debug!(
            generation = self.state.generation,
            population = self.state.grid.population(),
            "Stepped"
        );

        true
    }

    /// One iteration of the host loop: apply `intents` in order, then advance if due.
    ///
    /// A [`Intent::Quit`] stops intent processing, but the iteration still completes so the host
    /// can draw a final, whole generation before leaving.
    pub fn tick<I>(&mut self, intents: I, now: Instant) -> ControlFlow<()>
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut flow = ControlFlow::Continue(());

        for intent in intents {
            flow = self.apply(intent);

            if flow.is_break() {
                info!("Quit requested");
                break;
            }
        }

        self.advance(now);

        flow
    }
}
