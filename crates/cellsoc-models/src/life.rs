//! Conway's Game of Life and other outer-totalistic rule sets.

use crate::rulestring::{self, RuleParseError};
use cellsoc_automaton::{
    step_synchronous, Automaton, StepContext, StepReport, SyncCell, SynchronousRule,
    UpdateDiscipline,
};
use cellsoc_core::{CellState, Coord, StepError};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood};
use std::fmt;
use std::str::FromStr;

/// Game of Life alphabet. Seed codes: 0 `DEAD`, 1 `ALIVE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifeState {
    /// An empty cell.
    Dead = 0,
    /// A living cell.
    Alive = 1,
}

impl CellState for LifeState {
    const ALL: &'static [Self] = &[LifeState::Dead, LifeState::Alive];

    fn code(self) -> i32 {
        self as i32
    }

    fn label(self) -> &'static str {
        match self {
            LifeState::Dead => "DEAD",
            LifeState::Alive => "ALIVE",
        }
    }
}

/// Birth and survival thresholds on the live-neighbour count.
///
/// Bit `n` of `birth` is set when a dead cell with `n` live neighbours is
/// born; bit `n` of `survive` is set when a live cell with `n` live
/// neighbours stays alive. Every other live cell dies.
///
/// ```
/// use cellsoc_models::LifeRule;
///
/// let highlife = LifeRule::parse("B36/S23").unwrap();
/// assert!(highlife.next(false, 6));
/// assert!(!LifeRule::conway().next(false, 6));
/// assert_eq!(highlife.to_string(), "B36/S23");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survive: u16,
}

impl LifeRule {
    /// B3/S23.
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survive: (1 << 2) | (1 << 3),
        }
    }

    /// A rule from explicit neighbour counts.
    ///
    /// # Errors
    ///
    /// Returns [`RuleParseError::CountOutOfRange`] if any count exceeds 8.
    pub fn new(birth: &[u32], survive: &[u32]) -> Result<Self, RuleParseError> {
        Ok(Self {
            birth: mask_of(birth)?,
            survive: mask_of(survive)?,
        })
    }

    /// Parse a rulestring such as `"B3/S23"`.
    pub fn parse(s: &str) -> Result<Self, RuleParseError> {
        let (birth, survive) = rulestring::parse(s)?;
        Ok(Self { birth, survive })
    }

    /// Whether a dead cell with `live_neighbours` live neighbours is born.
    pub fn births_on(&self, live_neighbours: usize) -> bool {
        live_neighbours < 16 && self.birth & (1 << live_neighbours) != 0
    }

    /// Whether a live cell with `live_neighbours` live neighbours survives.
    pub fn survives_on(&self, live_neighbours: usize) -> bool {
        live_neighbours < 16 && self.survive & (1 << live_neighbours) != 0
    }

    /// Whether a cell is alive next tick.
    pub fn next(&self, alive: bool, live_neighbours: usize) -> bool {
        if alive {
            self.survives_on(live_neighbours)
        } else {
            self.births_on(live_neighbours)
        }
    }
}

fn mask_of(counts: &[u32]) -> Result<u16, RuleParseError> {
    counts.iter().try_fold(0u16, |mask, &count| {
        if count > rulestring::MAX_COUNT {
            Err(RuleParseError::CountOutOfRange { count })
        } else {
            Ok(mask | (1 << count))
        }
    })
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        rulestring::format(self.birth, self.survive, f)
    }
}

impl FromStr for LifeRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The Game of Life model.
///
/// Defaults to [`LifeRule::conway`] on a bounded grid with the eight
/// surrounding cells as neighbours. Cells missing from a seed map are dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOfLife {
    rule: LifeRule,
    neighbourhood: Neighbourhood,
    edge: EdgeBehavior,
}

impl GameOfLife {
    /// Game of Life with the given rule and default topology.
    pub fn new(rule: LifeRule) -> Self {
        Self {
            rule,
            neighbourhood: Neighbourhood::Square8,
            edge: EdgeBehavior::Absorb,
        }
    }

    /// B3/S23 with default topology.
    pub fn conway() -> Self {
        Self::new(LifeRule::conway())
    }

    /// Replace the default neighbourhood.
    pub fn with_neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Replace the default edge behavior.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// The birth/survival rule.
    pub fn rule(&self) -> LifeRule {
        self.rule
    }
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self::conway()
    }
}

impl SynchronousRule for GameOfLife {
    type State = LifeState;

    fn determine(
        &self,
        grid: &Grid<SyncCell<LifeState>>,
        at: Coord,
        current: LifeState,
    ) -> LifeState {
        let live = grid
            .neighbours(at)
            .into_iter()
            .filter(|&n| grid.state_at(n) == Some(LifeState::Alive))
            .count();
        if self.rule.next(current == LifeState::Alive, live) {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }
}

impl Automaton for GameOfLife {
    type Cell = SyncCell<LifeState>;

    fn name(&self) -> &str {
        "game-of-life"
    }

    fn discipline(&self) -> UpdateDiscipline {
        UpdateDiscipline::SnapshotCommit
    }

    fn default_edge(&self) -> EdgeBehavior {
        self.edge
    }

    fn default_neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood.clone()
    }

    fn default_state(&self) -> LifeState {
        LifeState::Dead
    }

    fn spawn(&self, state: LifeState) -> SyncCell<LifeState> {
        SyncCell::new(state)
    }

    fn step(
        &self,
        grid: &mut Grid<SyncCell<LifeState>>,
        _ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError> {
        Ok(step_synchronous(self, grid))
    }
}
