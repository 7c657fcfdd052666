pub use self::core::*;

pub mod core;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no player named {name:?} in team {side}")]
pub struct SwapError {
    pub name: String,
    pub side: TeamSide,
}
