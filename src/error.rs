use crate::Timestep;
use crate::game::Phase;

/// Every failure in this crate is a caller contract violation, never a
/// transient condition, so nothing retries or clamps; errors propagate as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Role assignment needs two value-cheater slots, one high-low-cheater
    /// slot, and at least one customer.
    #[error("game requires at least 4 players, got {0}")]
    InvalidConfiguration(usize),
    #[error("negative timestep {0}")]
    InvalidTimestep(Timestep),
    /// Raised for the terminal phase, and for a structured action presented
    /// under a phase it cannot mean anything in.
    #[error("no action encoding in {0} phase")]
    InvalidPhase(Phase),
    #[error("{field} {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: isize,
        min: isize,
        max: isize,
    },
    #[error("expected a permutation of 0..{n}")]
    InvalidPermutation { n: usize },
}

impl ActionError {
    /// Inclusive bounds check shared by the codecs and the manager.
    pub(crate) fn bounded(
        field: &'static str,
        value: isize,
        min: isize,
        max: isize,
    ) -> Result<isize, ActionError> {
        if value < min || value > max {
            Err(ActionError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        } else {
            Ok(value)
        }
    }
}
