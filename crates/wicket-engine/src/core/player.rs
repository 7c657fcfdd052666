use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum value for a single rating. Ratings run from 0 to 10 inclusive.
pub const SKILL_MAX: u8 = 10;

/// A player's preferred discipline.
///
/// The role is optional metadata: the raw scoring strategy ignores it, the
/// role-weighted strategy uses it to modulate batting and bowling
/// contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[display("All-rounder")]
    AllRounder,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown role {input:?}, expected batsman, bowler or all-rounder")]
pub struct ParseRoleError {
    pub input: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batsman" => Ok(Role::Batsman),
            "bowler" => Ok(Role::Bowler),
            "all-rounder" | "allrounder" => Ok(Role::AllRounder),
            _ => Err(ParseRoleError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A squad member with skill ratings.
///
/// Ratings are integers in `0..=SKILL_MAX`. Booster points are extra
/// influence for captains or key players; they count double toward overall
/// strength but never toward the batting/bowling balance tolerance.
///
/// Name uniqueness within a squad is enforced by the store (last write
/// wins), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub batting: u8,
    pub bowling: u8,
    #[serde(default)]
    pub booster: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Available for today's selection. Persisted squads written before this
    /// flag existed load as all-playing.
    #[serde(default = "playing_default")]
    pub playing: bool,
}

fn playing_default() -> bool {
    true
}

impl Player {
    /// Creates a playing, role-less player.
    ///
    /// # Panics
    ///
    /// Panics if any rating exceeds [`SKILL_MAX`].
    #[must_use]
    pub fn new(name: impl Into<String>, batting: u8, bowling: u8, booster: u8) -> Self {
        assert!(batting <= SKILL_MAX && bowling <= SKILL_MAX && booster <= SKILL_MAX);
        Self {
            name: name.into(),
            batting,
            bowling,
            booster,
            role: None,
            playing: true,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_case_insensitively() {
        assert_eq!("batsman".parse::<Role>().unwrap(), Role::Batsman);
        assert_eq!("Bowler".parse::<Role>().unwrap(), Role::Bowler);
        assert_eq!("all-rounder".parse::<Role>().unwrap(), Role::AllRounder);
        assert_eq!("AllRounder".parse::<Role>().unwrap(), Role::AllRounder);
    }

    #[test]
    fn test_role_parse_error_names_input() {
        let err = "keeper".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("keeper"));
    }

    #[test]
    fn test_player_deserialize_defaults() {
        // Records written by older squad files carry only the ratings.
        let player: Player =
            serde_json::from_str(r#"{"name":"Asha","batting":7,"bowling":4}"#).unwrap();
        assert_eq!(player.booster, 0);
        assert_eq!(player.role, None);
        assert!(player.playing);
    }

    #[test]
    fn test_player_serialize_skips_missing_role() {
        let json = serde_json::to_string(&Player::new("Asha", 7, 4, 1)).unwrap();
        assert!(!json.contains("role"));

        let json =
            serde_json::to_string(&Player::new("Ravi", 3, 9, 0).with_role(Role::Bowler)).unwrap();
        assert!(json.contains("Bowler"));
    }

    #[test]
    #[should_panic(expected = "batting <= SKILL_MAX")]
    fn test_player_new_rejects_out_of_range_rating() {
        let _ = Player::new("Asha", 11, 0, 0);
    }
}
