use crate::Price;
use crate::RawAction;
use crate::Size;
use crate::error::ActionError;
use crate::game::Config;

/// a two-sided market: buy up to bid_size contracts at bid_price, sell up
/// to ask_size at ask_price. sizes may be zero (no interest on that side),
/// prices may not (1-based by construction).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quote {
    pub bid_size: Size,
    pub bid_price: Price,
    pub ask_size: Size,
    pub ask_price: Price,
}

/// the quote <-> raw id bijection is a mixed-radix positional system,
/// most significant field first: bid_size, ask_size, bid_price, ask_price.
/// sizes carry radix (max_contracts_per_trade + 1), prices carry radix
/// max_contract_value and are stored zero-based as price - 1. both
/// directions must agree on this order exactly or round-trips break.
impl Quote {
    /// number of distinct encodable quotes under a config; raw ids for the
    /// trading phase live in [0, span).
    pub fn span(config: &Config) -> usize {
        let sizes = config.max_contracts_per_trade + 1;
        let prices = config.max_contract_value;
        sizes * sizes * prices * prices
    }

    /// flatten into the trading-phase raw id.
    pub fn rank(&self, config: &Config) -> Result<RawAction, ActionError> {
        let sizes = config.max_contracts_per_trade;
        let prices = config.max_contract_value;
        ActionError::bounded("bid size", self.bid_size as isize, 0, sizes as isize)?;
        ActionError::bounded("ask size", self.ask_size as isize, 0, sizes as isize)?;
        ActionError::bounded("bid price", self.bid_price as isize, 1, prices as isize)?;
        ActionError::bounded("ask price", self.ask_price as isize, 1, prices as isize)?;
        Ok((self.ask_price - 1)
            + (self.bid_price - 1) * prices
            + self.ask_size * prices * prices
            + self.bid_size * (sizes + 1) * prices * prices)
    }

    /// rebuild a quote from its raw id by successive division, peeling
    /// fields most significant first and re-adding 1 to each price.
    pub fn unrank(raw: RawAction, config: &Config) -> Result<Self, ActionError> {
        ActionError::bounded("raw quote", raw as isize, 0, Self::span(config) as isize - 1)?;
        let prices = config.max_contract_value;
        let per_bid_size = (config.max_contracts_per_trade + 1) * prices * prices;
        let per_ask_size = prices * prices;
        let mut rolling = raw;
        let bid_size = rolling / per_bid_size;
        rolling %= per_bid_size;
        let ask_size = rolling / per_ask_size;
        rolling %= per_ask_size;
        let bid_price = rolling / prices + 1;
        let ask_price = rolling % prices + 1;
        Ok(Self {
            bid_size,
            bid_price,
            ask_size,
            ask_price,
        })
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Price {} @ {} | Size {} x {}",
            self.bid_price, self.ask_price, self.bid_size, self.ask_size
        )
    }
}

/// order-book shorthand, e.g. "10 @ 11 [2 x 3]" for bid 10 for 2, ask 11
/// for 3. this is the form the interactive console deals in.
impl TryFrom<&str> for Quote {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (prices, sizes) = s
            .trim()
            .trim_end_matches(']')
            .split_once('[')
            .ok_or_else(|| anyhow::anyhow!("missing size bracket in quote '{}'", s))?;
        let (bid_price, ask_price) = prices
            .split_once('@')
            .ok_or_else(|| anyhow::anyhow!("missing @ in quote '{}'", s))?;
        let (bid_size, ask_size) = sizes
            .split_once('x')
            .ok_or_else(|| anyhow::anyhow!("missing x in quote sizes '{}'", s))?;
        Ok(Self {
            bid_size: bid_size.trim().parse()?,
            bid_price: bid_price.trim().parse()?,
            ask_size: ask_size.trim().parse()?,
            ask_price: ask_price.trim().parse()?,
        })
    }
}

impl crate::Arbitrary for Quote {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self {
            bid_size: rng.random_range(0..=crate::MAX_CONTRACTS_PER_TRADE),
            bid_price: rng.random_range(1..=crate::MAX_CONTRACT_VALUE),
            ask_size: rng.random_range(0..=crate::MAX_CONTRACTS_PER_TRADE),
            ask_price: rng.random_range(1..=crate::MAX_CONTRACT_VALUE),
        }
    }
}
