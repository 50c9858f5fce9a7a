//! Action encoding for the multi-player high-low trading game.
//!
//! A game playout walks through six phases: the environment deals two
//! candidate contract values, picks high or low settlement, deals a role
//! permutation, assigns each customer a target position, and then players
//! quote two-sided markets in round-robin order. A policy or game loop only
//! ever sees flat integer action ids; this crate is the bijection between
//! those ids and the structured action each phase actually means.
//!
//! Legality is the engine's problem. Meaning is ours.

pub mod codec;
pub mod error;
pub mod game;

/// Flat, phase-scoped action id. The same integer means different things
/// in different phases; always classify the timestep first.
pub type RawAction = usize;
/// Move count since the start of the game. Signed so that a nonsense
/// negative timestep is representable, and rejectable.
pub type Timestep = isize;
/// Contract price. 1-based; quoting a price of zero is not a thing.
pub type Price = usize;
/// Unsigned quote size in contracts.
pub type Size = usize;
/// Signed customer target position in contracts.
pub type Contracts = isize;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// Defaults for the standard table. Config carries per-game overrides.
// ============================================================================
/// Quoting turns each player gets before the game settles.
pub const STEPS_PER_PLAYER: usize = 100;
/// Largest size either leg of a quote may carry.
pub const MAX_CONTRACTS_PER_TRADE: usize = 5;
/// Largest absolute customer target position.
pub const CUSTOMER_MAX_SIZE: usize = 5;
/// Largest candidate contract value the environment may deal.
pub const MAX_CONTRACT_VALUE: usize = 30;
/// Number of players at the table.
pub const PLAYERS: usize = 5;
