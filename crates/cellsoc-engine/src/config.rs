//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a [`Simulation`].
//! [`validate()`](SimulationConfig::validate) checks the model-independent
//! invariants; the simulation constructor adds the checks that need the
//! model (its default topology and its state alphabet).
//!
//! [`Simulation`]: crate::Simulation

use std::error::Error;
use std::fmt;

use cellsoc_automaton::{Automaton, StateOf};
use cellsoc_core::{CellState, Coord};
use cellsoc_space::{EdgeBehavior, Neighbourhood, SpaceError, Topology};
use indexmap::IndexMap;

// ── SeedPolicy ─────────────────────────────────────────────────────

/// What happens to coordinates the seed map leaves out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Unlisted coordinates take the model's default state.
    #[default]
    FillDefault,
    /// Every coordinate must be listed; a gap is a [`ConfigError::MissingSeed`].
    RequireComplete,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or seeding a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid extents or neighbourhood are invalid.
    Space(SpaceError),
    /// A seed names a coordinate outside the grid.
    SeedOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// A seed uses a state code the model does not define.
    UnknownStateCode {
        /// Where the code appeared.
        coord: Coord,
        /// The unrecognised code.
        code: i32,
        /// The model whose alphabet was consulted.
        model: String,
    },
    /// [`SeedPolicy::RequireComplete`] is set and a coordinate has no seed.
    MissingSeed {
        /// The first unlisted coordinate in row-major order.
        coord: Coord,
    },
    /// The model itself could not be constructed.
    InvalidModel {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::SeedOutOfBounds { coord } => {
                write!(f, "seed coordinate {coord} is outside the grid")
            }
            Self::UnknownStateCode { coord, code, model } => {
                write!(f, "unknown {model} state code {code} at {coord}")
            }
            Self::MissingSeed { coord } => write!(f, "no seed for coordinate {coord}"),
            Self::InvalidModel { reason } => write!(f, "invalid model: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// ```
/// use cellsoc_core::Coord;
/// use cellsoc_engine::SimulationConfig;
///
/// let config = SimulationConfig::new(5, 5, [(Coord::new(2, 1), 1), (Coord::new(2, 2), 1)]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seeds.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of rows. Must be at least 1.
    pub rows: u32,
    /// Number of columns. Must be at least 1.
    pub cols: u32,
    /// Sparse initial states: coordinate to the model's integer state code.
    /// Iteration order is insertion order.
    pub seeds: IndexMap<Coord, i32>,
    /// Seed for the simulation's random generator. Default: 0.
    pub seed: u64,
    /// Treatment of coordinates missing from `seeds`. Default: fill.
    pub seed_policy: SeedPolicy,
    /// Overrides the model's default edge behavior.
    pub edge: Option<EdgeBehavior>,
    /// Overrides the model's default neighbourhood.
    pub neighbourhood: Option<Neighbourhood>,
}

impl SimulationConfig {
    /// A configuration with the given extents and seeds and every other
    /// field at its default.
    pub fn new(rows: u32, cols: u32, seeds: impl IntoIterator<Item = (Coord, i32)>) -> Self {
        Self {
            rows,
            cols,
            seeds: seeds.into_iter().collect(),
            seed: 0,
            seed_policy: SeedPolicy::default(),
            edge: None,
            neighbourhood: None,
        }
    }

    /// Set the random generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the policy for unlisted coordinates.
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Override the model's edge behavior.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = Some(edge);
        self
    }

    /// Override the model's neighbourhood.
    pub fn with_neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = Some(neighbourhood);
        self
    }

    /// Validate the model-independent invariants.
    ///
    /// Checks the grid extents (and the overrides, if both are given) and
    /// that every seed coordinate is inside the grid. State codes are
    /// checked when the simulation is built, since they depend on the
    /// model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Extents, plus any override combination that is invalid on
        //    its own.
        Topology::new(
            self.rows,
            self.cols,
            self.edge.unwrap_or_default(),
            self.neighbourhood.clone().unwrap_or_default(),
        )?;
        // 2. Seeds inside the rectangle.
        let (rows, cols) = (self.rows as i64, self.cols as i64);
        if let Some(&coord) = self.seeds.keys().find(|at| {
            let (r, c) = (at.row as i64, at.col as i64);
            r < 0 || c < 0 || r >= rows || c >= cols
        }) {
            return Err(ConfigError::SeedOutOfBounds { coord });
        }
        Ok(())
    }

    /// The topology `automaton` runs on under this configuration.
    pub fn topology_for<A: Automaton>(&self, automaton: &A) -> Result<Topology, ConfigError> {
        let edge = self.edge.unwrap_or_else(|| automaton.default_edge());
        let neighbourhood = self
            .neighbourhood
            .clone()
            .unwrap_or_else(|| automaton.default_neighbourhood());
        Ok(Topology::new(self.rows, self.cols, edge, neighbourhood)?)
    }

    /// Decode the state for `coord` under this configuration's seeds and
    /// policy.
    pub(crate) fn initial_state<A: Automaton>(
        &self,
        automaton: &A,
        coord: Coord,
    ) -> Result<StateOf<A>, ConfigError> {
        match self.seeds.get(&coord) {
            Some(&code) => decode::<A>(automaton, coord, code),
            None => match self.seed_policy {
                SeedPolicy::FillDefault => Ok(automaton.default_state()),
                SeedPolicy::RequireComplete => Err(ConfigError::MissingSeed { coord }),
            },
        }
    }

    /// Check every seed code against the model's alphabet, in seed-map
    /// order, so the first bad entry is the one reported.
    pub(crate) fn check_codes<A: Automaton>(&self, automaton: &A) -> Result<(), ConfigError> {
        for (&coord, &code) in &self.seeds {
            decode::<A>(automaton, coord, code)?;
        }
        Ok(())
    }
}

fn decode<A: Automaton>(automaton: &A, coord: Coord, code: i32) -> Result<StateOf<A>, ConfigError> {
    <StateOf<A> as CellState>::from_code(code).ok_or_else(|| ConfigError::UnknownStateCode {
        coord,
        code,
        model: automaton.name().to_string(),
    })
}
