//! Scoring strategies: how player ratings turn into team strength.
//!
//! The balancer is agnostic to how a rating sheet is interpreted. A
//! [`ScoringStrategy`] maps one player to three scores:
//!
//! - a batting score and a bowling score, which feed the per-skill balance
//!   tolerance, and
//! - a weighted score (`batting + bowling + 2 × booster`), which feeds the
//!   overall-strength objective.
//!
//! Booster points deliberately count only toward the weighted score, never
//! toward the batting/bowling tolerance.
//!
//! Two interpretations exist: [`RawSkillScoring`] takes the ratings as-is,
//! [`RoleWeightedScoring`] amplifies a player's primary discipline. The
//! strategy is selected once per generation call, so the search loop never
//! branches on the variant.

use std::fmt;

use wicket_engine::{Player, Role};

/// Weight applied to booster points in the overall-strength score.
pub const BOOSTER_WEIGHT: f32 = 2.0;

/// Maps player ratings to batting, bowling and overall-strength scores.
pub trait ScoringStrategy: fmt::Debug + Send + Sync {
    fn batting_score(&self, player: &Player) -> f32;

    fn bowling_score(&self, player: &Player) -> f32;

    /// Overall-strength contribution: batting + bowling + 2×booster.
    fn weighted_score(&self, player: &Player) -> f32 {
        self.batting_score(player)
            + self.bowling_score(player)
            + BOOSTER_WEIGHT * f32::from(player.booster)
    }
}

/// Takes the rating sheet at face value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSkillScoring;

impl ScoringStrategy for RawSkillScoring {
    fn batting_score(&self, player: &Player) -> f32 {
        f32::from(player.batting)
    }

    fn bowling_score(&self, player: &Player) -> f32 {
        f32::from(player.bowling)
    }
}

/// Factor applied to the primary discipline of a specialist.
const PRIMARY_FACTOR: f32 = 1.5;
/// Factor applied to both disciplines of an all-rounder.
const ALL_ROUNDER_FACTOR: f32 = 1.25;

/// Amplifies the discipline a player's role declares.
///
/// A batsman's batting (and a bowler's bowling) counts ×1.5, an
/// all-rounder's both disciplines count ×1.25, and players without a role
/// score exactly as [`RawSkillScoring`]. Booster handling is unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleWeightedScoring;

impl RoleWeightedScoring {
    fn factors(role: Option<Role>) -> (f32, f32) {
        match role {
            Some(Role::Batsman) => (PRIMARY_FACTOR, 1.0),
            Some(Role::Bowler) => (1.0, PRIMARY_FACTOR),
            Some(Role::AllRounder) => (ALL_ROUNDER_FACTOR, ALL_ROUNDER_FACTOR),
            None => (1.0, 1.0),
        }
    }
}

impl ScoringStrategy for RoleWeightedScoring {
    fn batting_score(&self, player: &Player) -> f32 {
        Self::factors(player.role).0 * f32::from(player.batting)
    }

    fn bowling_score(&self, player: &Player) -> f32 {
        Self::factors(player.role).1 * f32::from(player.bowling)
    }
}

/// Aggregated scores for one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamTotals {
    pub batting: f32,
    pub bowling: f32,
    pub weighted: f32,
}

impl TeamTotals {
    #[must_use]
    pub fn compute<'a, I>(scoring: &dyn ScoringStrategy, players: I) -> Self
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let mut totals = TeamTotals {
            batting: 0.0,
            bowling: 0.0,
            weighted: 0.0,
        };
        for player in players {
            totals.batting += scoring.batting_score(player);
            totals.bowling += scoring.bowling_score(player);
            totals.weighted += scoring.weighted_score(player);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_scoring_uses_ratings_verbatim() {
        let player = Player::new("Asha", 7, 4, 3);
        assert_eq!(RawSkillScoring.batting_score(&player), 7.0);
        assert_eq!(RawSkillScoring.bowling_score(&player), 4.0);
        // booster counts double in the weighted score only
        assert_eq!(RawSkillScoring.weighted_score(&player), 7.0 + 4.0 + 6.0);
    }

    #[test]
    fn test_role_weighting_amplifies_primary_discipline() {
        let batsman = Player::new("Asha", 8, 2, 0).with_role(Role::Batsman);
        assert_eq!(RoleWeightedScoring.batting_score(&batsman), 12.0);
        assert_eq!(RoleWeightedScoring.bowling_score(&batsman), 2.0);

        let bowler = Player::new("Ravi", 2, 8, 0).with_role(Role::Bowler);
        assert_eq!(RoleWeightedScoring.batting_score(&bowler), 2.0);
        assert_eq!(RoleWeightedScoring.bowling_score(&bowler), 12.0);

        let all_rounder = Player::new("Kiri", 4, 4, 0).with_role(Role::AllRounder);
        assert_eq!(RoleWeightedScoring.batting_score(&all_rounder), 5.0);
        assert_eq!(RoleWeightedScoring.bowling_score(&all_rounder), 5.0);
    }

    #[test]
    fn test_role_weighting_without_role_matches_raw() {
        let player = Player::new("Asha", 6, 3, 2);
        assert_eq!(
            RoleWeightedScoring.batting_score(&player),
            RawSkillScoring.batting_score(&player)
        );
        assert_eq!(
            RoleWeightedScoring.weighted_score(&player),
            RawSkillScoring.weighted_score(&player)
        );
    }

    #[test]
    fn test_totals_sum_over_players() {
        let players = [Player::new("A", 5, 5, 0), Player::new("B", 3, 1, 2)];
        let totals = TeamTotals::compute(&RawSkillScoring, &players);
        assert_eq!(totals.batting, 8.0);
        assert_eq!(totals.bowling, 6.0);
        assert_eq!(totals.weighted, 8.0 + 6.0 + 4.0);
    }

    #[test]
    fn test_totals_of_empty_team_are_zero() {
        let none: &[Player] = &[];
        let totals = TeamTotals::compute(&RawSkillScoring, none);
        assert_eq!(totals.weighted, 0.0);
    }
}
