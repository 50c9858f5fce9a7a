use crate::Timestep;
use crate::error::ActionError;
use crate::game::Config;

/// Where along the game timeline a timestep falls. The ordering is the
/// state machine: phases advance monotonically with the move count, none
/// is ever revisited, and Terminal absorbs everything past the last quote.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// two candidate contract values get dealt, one timestep each
    ChanceValue,
    /// the environment settles on the higher or lower candidate
    ChanceHighLow,
    /// one permutation deal assigns every player a role
    ChancePermutation,
    /// each customer in turn receives a target position
    CustomerSize,
    /// players quote two-sided markets in round-robin order
    PlayerTrading,
    Terminal,
}

impl Phase {
    pub const fn all() -> &'static [Self] {
        &[
            Self::ChanceValue,
            Self::ChanceHighLow,
            Self::ChancePermutation,
            Self::CustomerSize,
            Self::PlayerTrading,
            Self::Terminal,
        ]
    }

    /// classify a timestep. the six phases partition [0, inf) into
    /// half-open intervals: a timestep equal to the first index of the
    /// next phase already belongs to that phase.
    pub fn at(timestep: Timestep, config: &Config) -> Result<Self, ActionError> {
        let players = config.num_players as Timestep;
        let quoting = (config.steps_per_player * config.num_players) as Timestep;
        match timestep {
            t if t < 0 => Err(ActionError::InvalidTimestep(t)),
            t if t < 2 => Ok(Self::ChanceValue),
            2 => Ok(Self::ChanceHighLow),
            3 => Ok(Self::ChancePermutation),
            t if t < 4 + players => Ok(Self::CustomerSize),
            t if t < 4 + players + quoting => Ok(Self::PlayerTrading),
            _ => Ok(Self::Terminal),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ChanceValue => write!(f, "chance value"),
            Self::ChanceHighLow => write!(f, "chance high-low"),
            Self::ChancePermutation => write!(f, "chance permutation"),
            Self::CustomerSize => write!(f, "customer size"),
            Self::PlayerTrading => write!(f, "player trading"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

impl crate::Arbitrary for Phase {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().expect("phases are nonempty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            num_players: 4,
            steps_per_player: 2,
            ..Config::default()
        }
    }

    #[test]
    fn partitions_the_timeline() {
        let ref config = config();
        assert!(Phase::at(0, config).unwrap() == Phase::ChanceValue);
        assert!(Phase::at(1, config).unwrap() == Phase::ChanceValue);
        assert!(Phase::at(2, config).unwrap() == Phase::ChanceHighLow);
        assert!(Phase::at(3, config).unwrap() == Phase::ChancePermutation);
        for t in 4..8 {
            assert!(Phase::at(t, config).unwrap() == Phase::CustomerSize);
        }
        for t in 8..16 {
            assert!(Phase::at(t, config).unwrap() == Phase::PlayerTrading);
        }
        assert!(Phase::at(16, config).unwrap() == Phase::Terminal);
        assert!(Phase::at(1000, config).unwrap() == Phase::Terminal);
    }

    #[test]
    fn phases_advance_monotonically() {
        let ref config = config();
        let order = |p: Phase| Phase::all().iter().position(|q| *q == p).unwrap();
        let mut last = 0;
        for t in 0..32 {
            let next = order(Phase::at(t, config).unwrap());
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn rejects_negative_timestep() {
        let ref config = config();
        assert!(Phase::at(-1, config) == Err(ActionError::InvalidTimestep(-1)));
    }
}
