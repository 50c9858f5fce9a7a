use crate::Contracts;
use crate::Price;
use crate::RawAction;
use crate::Size;
use crate::Timestep;
use crate::codec::Quote;
use crate::codec::lehmer;
use crate::error::ActionError;
use crate::game::Action;
use crate::game::Assignment;
use crate::game::Config;
use crate::game::Phase;

/// The only entry point callers need: classifies timesteps, bounds raw ids
/// per phase, and converts between raw and structured actions in both
/// directions. Holds nothing but the immutable config, so any number of
/// callers may share one across threads without coordination.
#[derive(Debug, Clone)]
pub struct ActionManager {
    config: Config,
}

impl ActionManager {
    pub fn new(config: Config) -> Result<Self, ActionError> {
        let config = config.validated()?;
        log::debug!(
            "action spaces: value {} high-low 2 permutation {} customer {} trading {}",
            config.max_contract_value,
            lehmer::factorial(config.num_players),
            2 * config.customer_max_size + 1,
            Quote::span(&config),
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// which phase a timestep falls in.
    pub fn phase_of(&self, timestep: Timestep) -> Result<Phase, ActionError> {
        Phase::at(timestep, &self.config)
    }

    /// inclusive (min, max) raw id bounds for a phase. this is the full
    /// theoretical alphabet; the engine may consider only a subset legal
    /// at any real game state.
    pub fn valid_range(&self, phase: Phase) -> Result<(RawAction, RawAction), ActionError> {
        match phase {
            Phase::ChanceValue => Ok((0, self.config.max_contract_value - 1)),
            Phase::ChanceHighLow => Ok((0, 1)),
            Phase::ChancePermutation => Ok((0, lehmer::factorial(self.config.num_players) - 1)),
            Phase::CustomerSize => Ok((0, 2 * self.config.customer_max_size)),
            Phase::PlayerTrading => Ok((0, Quote::span(&self.config) - 1)),
            Phase::Terminal => Err(ActionError::InvalidPhase(phase)),
        }
    }

    /// flatten a structured action into its phase-scoped raw id. an action
    /// presented under any phase but its own is refused.
    pub fn encode(&self, phase: Phase, action: &Action) -> Result<RawAction, ActionError> {
        match (phase, action) {
            (Phase::ChanceValue, Action::ContractValue(value)) => {
                let prices = self.config.max_contract_value as isize;
                ActionError::bounded("contract value", *value as isize, 1, prices)?;
                Ok(value - 1)
            }
            (Phase::ChanceHighLow, Action::HighLow(is_high)) => Ok(*is_high as RawAction),
            (Phase::ChancePermutation, Action::Permutation(deal)) => {
                if deal.permutation().len() != self.config.num_players {
                    Err(ActionError::InvalidPermutation {
                        n: self.config.num_players,
                    })
                } else {
                    Ok(deal.rank())
                }
            }
            (Phase::CustomerSize, Action::CustomerSize(size)) => self.encode_customer_size(*size),
            (Phase::PlayerTrading, Action::Quote(quote)) => quote.rank(&self.config),
            (phase, _) => Err(ActionError::InvalidPhase(phase)),
        }
    }

    /// rebuild the structured action a raw id means under a phase. the raw
    /// id is checked against the phase alphabet before anything else.
    pub fn decode(&self, phase: Phase, raw: RawAction) -> Result<Action, ActionError> {
        let (min, max) = self.valid_range(phase)?;
        ActionError::bounded("raw action", raw as isize, min as isize, max as isize)?;
        match phase {
            Phase::ChanceValue => Ok(Action::ContractValue(raw + 1)),
            Phase::ChanceHighLow => Ok(Action::HighLow(raw == 1)),
            Phase::ChancePermutation => Ok(Action::Permutation(Assignment::unrank(
                raw,
                self.config.num_players,
            )?)),
            Phase::CustomerSize => {
                let size = raw as Contracts - self.config.customer_max_size as Contracts;
                // reopen the gap over the forbidden zero position
                let size = if size >= 0 { size + 1 } else { size };
                Ok(Action::CustomerSize(size))
            }
            Phase::PlayerTrading => Ok(Action::Quote(Quote::unrank(raw, &self.config)?)),
            Phase::Terminal => Err(ActionError::InvalidPhase(phase)),
        }
    }

    /// classify-then-decode, for callers holding a move count and a raw id.
    pub fn decode_at(&self, timestep: Timestep, raw: RawAction) -> Result<Action, ActionError> {
        self.decode(self.phase_of(timestep)?, raw)
    }

    /// positive sizes shift down one before the offset; the raw alphabet
    /// is contiguous across the forbidden zero. decode applies the inverse
    /// shift and maps the top raw slot to customer_max_size + 1, so that
    /// one decode-only size re-encodes instead of erroring.
    fn encode_customer_size(&self, size: Contracts) -> Result<RawAction, ActionError> {
        let max = self.config.customer_max_size as Contracts;
        if size == 0 || size < -max || size > max + 1 {
            return Err(ActionError::OutOfRange {
                field: "customer size",
                value: size,
                min: -max,
                max: max + 1,
            });
        }
        let shifted = if size > 0 { size - 1 } else { size };
        Ok((shifted + max) as RawAction)
    }

    // ------------------------------------------------------------------
    // raw-action constructors, for callers who know what they want to do
    // and only need the id to hand the engine.
    // ------------------------------------------------------------------

    pub fn contract_value(&self, value: Price) -> Result<RawAction, ActionError> {
        self.encode(Phase::ChanceValue, &Action::ContractValue(value))
    }

    pub fn high_low(&self, is_high: bool) -> Result<RawAction, ActionError> {
        self.encode(Phase::ChanceHighLow, &Action::HighLow(is_high))
    }

    /// strictly bounded, unlike raw encode: the top decode-only size is
    /// not something a caller should ever ask for by name.
    pub fn customer_size(&self, size: Contracts) -> Result<RawAction, ActionError> {
        let max = self.config.customer_max_size as Contracts;
        ActionError::bounded("customer size", size, -max, max)?;
        self.encode(Phase::CustomerSize, &Action::CustomerSize(size))
    }

    pub fn permutation(&self, permutation: Vec<usize>) -> Result<RawAction, ActionError> {
        let deal = Assignment::try_from(permutation)?;
        self.encode(Phase::ChancePermutation, &Action::Permutation(deal))
    }

    /// the trivial deal: player i in slot i.
    pub fn identity_permutation(&self) -> Result<RawAction, ActionError> {
        self.permutation((0..self.config.num_players).collect())
    }

    pub fn quote(
        &self,
        bid_price: Price,
        bid_size: Size,
        ask_price: Price,
        ask_size: Size,
    ) -> Result<RawAction, ActionError> {
        self.encode(
            Phase::PlayerTrading,
            &Action::Quote(Quote {
                bid_size,
                bid_price,
                ask_size,
                ask_price,
            }),
        )
    }
}
