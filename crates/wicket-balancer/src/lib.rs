//! Team balancing for two-sided squad games.
//!
//! This crate partitions a roster into the Gold and Black teams:
//!
//! - [`scoring`] - Strategies that turn player ratings into batting, bowling
//!   and overall-strength scores
//! - [`locks`] - Hard pre-assignments of players to a side
//! - [`balancer`] - The randomized trial-and-reject search minimizing the
//!   cross-team strength difference
//! - [`seed`] - 128-bit seeds for reproducible generation
//!
//! The manual swap operation lives with the team type in `wicket-engine`;
//! this crate covers everything that involves scoring or randomness.

pub use self::{balancer::*, locks::*, scoring::*, seed::*};

pub mod balancer;
pub mod locks;
pub mod scoring;
pub mod seed;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum BalanceError {
    #[display("roster must contain at least two players, got {count}")]
    InsufficientRoster { count: usize },
    #[display("player {name:?} is locked to both Gold and Black")]
    ConflictingLock { name: String },
}
