//! Runtime model selection behind an object-safe facade.
//!
//! A renderer that learns the model from a file or a menu holds a
//! `Box<dyn Simulate>` and never names the model type.

use cellsoc_automaton::{Automaton, StateOf};
use cellsoc_core::{CellState, Coord, StepError, TickId};
use cellsoc_grid::GridSnapshot;
use cellsoc_models::{GameOfLife, Percolation, WaTor};
use indexmap::IndexMap;

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::TickMetrics;
use crate::simulation::Simulation;

/// The model-agnostic view of a [`Simulation`].
///
/// Every state is exposed by its integer code and label, which is all a
/// renderer needs to map cells to colors.
pub trait Simulate: Send {
    /// The model's name, e.g. `"game-of-life"`.
    fn model_name(&self) -> &str;

    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Current tick (0 after construction or reset).
    fn current_tick(&self) -> TickId;

    /// Execute one tick. See [`Simulation::advance`].
    fn advance(&mut self) -> Result<&TickMetrics, StepError>;

    /// Rebuild from the stored configuration. See [`Simulation::reset`].
    fn reset(&mut self) -> Result<(), ConfigError>;

    /// State code at `coord`, or `None` if out of bounds.
    fn state_code(&self, coord: Coord) -> Option<i32>;

    /// State label at `coord`, or `None` if out of bounds.
    fn state_label(&self, coord: Coord) -> Option<&'static str>;

    /// Every `(code, label)` pair of the model's alphabet.
    fn legend(&self) -> Vec<(i32, &'static str)>;

    /// An owned copy of every cell's state code.
    fn snapshot(&self) -> GridSnapshot;

    /// The current grid as a complete seed map.
    fn export_seeds(&self) -> IndexMap<Coord, i32>;
}

impl<A: Automaton> Simulate for Simulation<A> {
    fn model_name(&self) -> &str {
        self.automaton().name()
    }

    fn rows(&self) -> u32 {
        self.grid().rows()
    }

    fn cols(&self) -> u32 {
        self.grid().cols()
    }

    fn current_tick(&self) -> TickId {
        Simulation::current_tick(self)
    }

    fn advance(&mut self) -> Result<&TickMetrics, StepError> {
        Simulation::advance(self)
    }

    fn reset(&mut self) -> Result<(), ConfigError> {
        Simulation::reset(self)
    }

    fn state_code(&self, coord: Coord) -> Option<i32> {
        self.state_at(coord).map(CellState::code)
    }

    fn state_label(&self, coord: Coord) -> Option<&'static str> {
        self.state_at(coord).map(CellState::label)
    }

    fn legend(&self) -> Vec<(i32, &'static str)> {
        <StateOf<A> as CellState>::ALL
            .iter()
            .map(|s| (s.code(), s.label()))
            .collect()
    }

    fn snapshot(&self) -> GridSnapshot {
        Simulation::snapshot(self)
    }

    fn export_seeds(&self) -> IndexMap<Coord, i32> {
        Simulation::export_seeds(self)
    }
}

/// A model chosen at runtime, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSpec {
    /// Game of Life with a birth/survival rule.
    GameOfLife(GameOfLife),
    /// Percolation.
    Percolation(Percolation),
    /// Wa-Tor predator-prey.
    WaTor(WaTor),
}

impl ModelSpec {
    /// A model with default parameters, looked up by name.
    ///
    /// Matching ignores case, spaces, `-` and `_`. Accepted names:
    /// `game-of-life` (or `life`), `percolation`, `wator` (or
    /// `predator-prey`).
    ///
    /// ```
    /// use cellsoc_engine::ModelSpec;
    ///
    /// assert_eq!(ModelSpec::from_name("Game of Life").unwrap().name(), "game-of-life");
    /// assert_eq!(ModelSpec::from_name("Wa-Tor").unwrap().name(), "wator");
    /// assert!(ModelSpec::from_name("langton").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "gameoflife" | "life" => Ok(Self::GameOfLife(GameOfLife::default())),
            "percolation" => Ok(Self::Percolation(Percolation::default())),
            "wator" | "predatorprey" => Ok(Self::WaTor(WaTor::default())),
            _ => Err(ConfigError::InvalidModel {
                reason: format!("unknown model {name:?}"),
            }),
        }
    }

    /// The model's name.
    pub fn name(&self) -> &str {
        match self {
            Self::GameOfLife(m) => m.name(),
            Self::Percolation(m) => m.name(),
            Self::WaTor(m) => m.name(),
        }
    }
}

/// Build a simulation of the model `spec` names.
pub fn build_simulation(
    spec: ModelSpec,
    config: SimulationConfig,
) -> Result<Box<dyn Simulate>, ConfigError> {
    let sim: Box<dyn Simulate> = match spec {
        ModelSpec::GameOfLife(m) => Box::new(Simulation::new(m, config)?),
        ModelSpec::Percolation(m) => Box::new(Simulation::new(m, config)?),
        ModelSpec::WaTor(m) => Box::new(Simulation::new(m, config)?),
    };
    Ok(sim)
}
