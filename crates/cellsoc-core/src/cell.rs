//! The state alphabet and cell abstractions shared by every model.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed, finite set of symbolic cell states.
///
/// Each model defines one alphabet (for example `{Dead, Alive}`). States
/// compare by identity only; there is no implied ordering between them.
///
/// Every state has a fixed integer code used by seed configurations and a
/// short label used by renderers. Codes must be unique within an alphabet.
pub trait CellState: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every state of the alphabet, in code order.
    const ALL: &'static [Self];

    /// Integer code of this state in seed configurations.
    fn code(self) -> i32;

    /// Upper-case display label, e.g. `"ALIVE"`.
    fn label(self) -> &'static str;

    /// Decode an integer state code. Returns `None` for unknown codes.
    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

/// One grid slot's payload.
///
/// A cell's position is the grid slot that holds it, so the trait only
/// exposes the current state. Model-specific auxiliary data (pending
/// states, turn counters) lives on the implementing type.
pub trait Cell: Clone + Debug + Send + 'static {
    /// The alphabet this cell's state is drawn from.
    type State: CellState;

    /// The current state.
    fn state(&self) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Toggle {
        Off,
        On,
    }

    impl CellState for Toggle {
        const ALL: &'static [Self] = &[Toggle::Off, Toggle::On];

        fn code(self) -> i32 {
            match self {
                Toggle::Off => 0,
                Toggle::On => 7,
            }
        }

        fn label(self) -> &'static str {
            match self {
                Toggle::Off => "OFF",
                Toggle::On => "ON",
            }
        }
    }

    #[test]
    fn from_code_uses_declared_codes() {
        assert_eq!(Toggle::from_code(0), Some(Toggle::Off));
        assert_eq!(Toggle::from_code(7), Some(Toggle::On));
        assert_eq!(Toggle::from_code(1), None);
        assert_eq!(Toggle::from_code(-1), None);
    }
}
