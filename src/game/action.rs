use crate::Contracts;
use crate::Price;
use crate::codec::Quote;
use crate::game::Assignment;
use crate::game::Phase;
use colored::Colorize;

/// A structured action, one shape per non-terminal phase. Every consumer
/// matches this exhaustively, so growing the game a phase is a compile-time
/// checked change rather than a scattered set of conditionals.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// one candidate contract value, dealt by the environment
    ContractValue(Price),
    /// whether the contract settles at the higher candidate
    HighLow(bool),
    /// the role deal for the whole table
    Permutation(Assignment),
    /// one customer's target position, never zero
    CustomerSize(Contracts),
    /// a player's two-sided market
    Quote(Quote),
}

impl Action {
    /// the phase whose raw alphabet this action belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            Self::ContractValue(_) => Phase::ChanceValue,
            Self::HighLow(_) => Phase::ChanceHighLow,
            Self::Permutation(_) => Phase::ChancePermutation,
            Self::CustomerSize(_) => Phase::CustomerSize,
            Self::Quote(_) => Phase::PlayerTrading,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ContractValue(value) => {
                write!(f, "Environment settles one piece of contract value to {}", value)
            }
            Self::HighLow(true) => {
                write!(f, "Environment chooses {} contract settlement", "high".green())
            }
            Self::HighLow(false) => {
                write!(f, "Environment chooses {} contract settlement", "low".red())
            }
            Self::Permutation(deal) => write!(f, "{}", deal),
            Self::CustomerSize(size) if *size > 0 => {
                write!(f, "Customer target position: {}", format!("+{}", size).green())
            }
            Self::CustomerSize(size) => {
                write!(f, "Customer target position: {}", format!("{}", size).red())
            }
            Self::Quote(quote) => write!(f, "{}", quote),
        }
    }
}

impl crate::Arbitrary for Action {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        match rng.random_range(0..5) {
            0 => Self::ContractValue(rng.random_range(1..=crate::MAX_CONTRACT_VALUE)),
            1 => Self::HighLow(rng.random_bool(0.5)),
            2 => Self::Permutation(Assignment::random()),
            3 => {
                let size = rng.random_range(1..=crate::CUSTOMER_MAX_SIZE) as Contracts;
                Self::CustomerSize(if rng.random_bool(0.5) { size } else { -size })
            }
            _ => Self::Quote(Quote::random()),
        }
    }
}

use crate::Arbitrary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_knows_its_phase() {
        assert!(Action::ContractValue(1).phase() == Phase::ChanceValue);
        assert!(Action::HighLow(true).phase() == Phase::ChanceHighLow);
        assert!(Action::Permutation(Assignment::identity(4)).phase() == Phase::ChancePermutation);
        assert!(Action::CustomerSize(-2).phase() == Phase::CustomerSize);
        assert!(Action::Quote(Quote::random()).phase() == Phase::PlayerTrading);
    }

    #[test]
    fn random_actions_stay_in_range() {
        for _ in 0..200 {
            match Action::random() {
                Action::ContractValue(value) => {
                    assert!(value >= 1 && value <= crate::MAX_CONTRACT_VALUE)
                }
                Action::CustomerSize(size) => {
                    assert!(size != 0 && size.unsigned_abs() <= crate::CUSTOMER_MAX_SIZE)
                }
                _ => {}
            }
        }
    }
}
