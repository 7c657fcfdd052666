pub use self::{player::*, team::*};

pub(crate) mod player;
pub(crate) mod team;
