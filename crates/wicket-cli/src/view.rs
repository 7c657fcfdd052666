//! Plain-text rendering of the squad and the generated teams.

use wicket_balancer::{ScoringStrategy, TeamTotals};
use wicket_engine::{Player, Team};

use crate::store::SavedTeams;

pub(crate) fn print_squad(players: &[Player]) {
    if players.is_empty() {
        println!("squad is empty (add players with `wicket add`)");
        return;
    }
    println!(
        "{:<20} {:>7} {:>7} {:>7}  {:<12} {}",
        "NAME", "BATTING", "BOWLING", "BOOSTER", "ROLE", "PLAYING"
    );
    for player in players {
        let role = player
            .role
            .map_or_else(|| "-".to_owned(), |role| role.to_string());
        println!(
            "{:<20} {:>7} {:>7} {:>7}  {:<12} {}",
            player.name,
            player.batting,
            player.bowling,
            player.booster,
            role,
            if player.playing { "yes" } else { "no" }
        );
    }
    println!("{} player(s)", players.len());
}

pub(crate) fn print_teams(saved: &SavedTeams) {
    let scoring = saved.scoring.strategy();
    println!(
        "generated {} (seed {})",
        saved.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        saved.seed
    );
    println!();
    let gold = print_team(&saved.gold, &*scoring);
    println!();
    let black = print_team(&saved.black, &*scoring);
    println!();
    println!("strength difference: {}", (gold.weighted - black.weighted).abs());
    if !saved.within_tolerance {
        println!("note: no split within the skill tolerance was found; this is the fallback split");
    }
}

fn print_team(team: &Team, scoring: &dyn ScoringStrategy) -> TeamTotals {
    let totals = TeamTotals::compute(scoring, team.players());
    println!("TEAM {} ({} players)", team.side(), team.len());
    for player in team.players() {
        println!(
            "  {:<20} bat {:>2}  bowl {:>2}  boost {:>2}",
            player.name, player.batting, player.bowling, player.booster
        );
    }
    println!(
        "  batting {}  bowling {}  weighted {}",
        totals.batting, totals.bowling, totals.weighted
    );
    totals
}
