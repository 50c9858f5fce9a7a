use crate::error::ActionError;

/// Immutable per-game parameters. Built once, read everywhere; every codec
/// in this crate is a pure function of its arguments and one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// quoting turns each player gets before settlement
    pub steps_per_player: usize,
    /// largest size either leg of a quote may carry
    pub max_contracts_per_trade: usize,
    /// largest absolute customer target position
    pub customer_max_size: usize,
    /// largest candidate contract value the environment may deal
    pub max_contract_value: usize,
    /// players at the table
    pub num_players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps_per_player: crate::STEPS_PER_PLAYER,
            max_contracts_per_trade: crate::MAX_CONTRACTS_PER_TRADE,
            customer_max_size: crate::CUSTOMER_MAX_SIZE,
            max_contract_value: crate::MAX_CONTRACT_VALUE,
            num_players: crate::PLAYERS,
        }
    }
}

impl Config {
    /// The role permutation hands out two value-cheater slots, one
    /// high-low-cheater slot, and fills the rest with customers, so a table
    /// shorter than 4 cannot be dealt.
    pub fn validated(self) -> Result<Self, ActionError> {
        if self.num_players < 4 {
            Err(ActionError::InvalidConfiguration(self.num_players))
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_standard_table() {
        let config = Config::default();
        assert!(config.num_players == 5);
        assert!(config.max_contract_value == 30);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn rejects_short_table() {
        let config = Config {
            num_players: 3,
            ..Config::default()
        };
        assert!(config.validated() == Err(ActionError::InvalidConfiguration(3)));
    }
}
