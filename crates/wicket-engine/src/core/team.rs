use std::mem;

use serde::{Deserialize, Serialize};

use crate::{SwapError, core::player::Player};

/// The two sides a generation call produces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
pub enum TeamSide {
    Gold,
    Black,
}

impl TeamSide {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            TeamSide::Gold => TeamSide::Black,
            TeamSide::Black => TeamSide::Gold,
        }
    }
}

/// One generated team: a side plus the players assigned to it.
///
/// Teams are produced fresh by each generation call and are immutable
/// afterwards except for [`Team::swap_player`], the manual override that
/// exchanges one player with the opposite team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    side: TeamSide,
    players: Vec<Player>,
}

impl Team {
    #[must_use]
    pub fn new(side: TeamSide, players: Vec<Player>) -> Self {
        Self { side, players }
    }

    #[must_use]
    pub fn side(&self) -> TeamSide {
        self.side
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    /// Exchanges `own_name` from this team with `other_name` from `other`.
    ///
    /// Both team sizes are preserved and every other player is untouched.
    /// The skill tolerance is deliberately not re-checked: a manual swap
    /// takes precedence over the automatic balance.
    pub fn swap_player(
        &mut self,
        other: &mut Team,
        own_name: &str,
        other_name: &str,
    ) -> Result<(), SwapError> {
        let own_idx = self.position_of(own_name).ok_or_else(|| SwapError {
            name: own_name.to_owned(),
            side: self.side,
        })?;
        let other_idx = other.position_of(other_name).ok_or_else(|| SwapError {
            name: other_name.to_owned(),
            side: other.side,
        })?;
        mem::swap(&mut self.players[own_idx], &mut other.players[other_idx]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(side: TeamSide, names: &[&str]) -> Team {
        let players = names
            .iter()
            .map(|name| Player::new(*name, 5, 5, 0))
            .collect();
        Team::new(side, players)
    }

    #[test]
    fn test_swap_exchanges_membership() {
        let mut gold = team(TeamSide::Gold, &["A", "B"]);
        let mut black = team(TeamSide::Black, &["C", "D"]);

        gold.swap_player(&mut black, "B", "C").unwrap();

        assert!(gold.contains("C"));
        assert!(black.contains("B"));
        assert!(!gold.contains("B"));
        assert!(!black.contains("C"));
    }

    #[test]
    fn test_swap_preserves_sizes_and_other_players() {
        let mut gold = team(TeamSide::Gold, &["A", "B", "E"]);
        let mut black = team(TeamSide::Black, &["C", "D"]);

        gold.swap_player(&mut black, "A", "D").unwrap();

        assert_eq!(gold.len(), 3);
        assert_eq!(black.len(), 2);
        assert!(gold.contains("B"));
        assert!(gold.contains("E"));
        assert!(black.contains("C"));
    }

    #[test]
    fn test_swap_unknown_name_reports_searched_side() {
        let mut gold = team(TeamSide::Gold, &["A"]);
        let mut black = team(TeamSide::Black, &["B"]);

        let err = gold.swap_player(&mut black, "X", "B").unwrap_err();
        assert_eq!(err.side, TeamSide::Gold);
        assert!(err.to_string().contains("\"X\""));

        let err = gold.swap_player(&mut black, "A", "Y").unwrap_err();
        assert_eq!(err.side, TeamSide::Black);

        // a failed swap leaves both teams untouched
        assert!(gold.contains("A"));
        assert!(black.contains("B"));
    }

    #[test]
    fn test_team_side_round_trips_through_str() {
        assert_eq!("gold".parse::<TeamSide>().unwrap(), TeamSide::Gold);
        assert_eq!("Black".parse::<TeamSide>().unwrap(), TeamSide::Black);
        assert_eq!(TeamSide::Gold.to_string(), "Gold");
        assert_eq!(TeamSide::Gold.opposite(), TeamSide::Black);
    }
}
