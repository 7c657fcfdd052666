use std::path::Path;

use chrono::Utc;
use rand::Rng as _;
use wicket_balancer::{BalanceSeed, DEFAULT_TRIAL_BUDGET, Locks, TeamBalancer};
use wicket_engine::{Player, TeamSide};

use crate::{
    store::{RosterStore, SavedTeams, ScoringKind, TeamsStore},
    view,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Comma-separated names locked into team Gold
    #[arg(long, value_delimiter = ',')]
    lock_gold: Vec<String>,
    /// Comma-separated names locked into team Black
    #[arg(long, value_delimiter = ',')]
    lock_black: Vec<String>,
    /// Rating interpretation: raw or role
    #[arg(long, default_value = "raw")]
    scoring: ScoringKind,
    /// Randomized partition attempts
    #[arg(long, default_value_t = DEFAULT_TRIAL_BUDGET)]
    trials: usize,
    /// 32-character hex seed for a reproducible roll
    #[arg(long)]
    seed: Option<BalanceSeed>,
}

pub(crate) fn run(data_dir: &Path, arg: &GenerateArg) -> anyhow::Result<()> {
    let store = RosterStore::new(data_dir);
    let roster: Vec<Player> = store.load().into_iter().filter(|p| p.playing).collect();

    let mut locks = Locks::new();
    for name in &arg.lock_gold {
        locks.lock(name.clone(), TeamSide::Gold);
    }
    for name in &arg.lock_black {
        locks.lock(name.clone(), TeamSide::Black);
    }
    for (name, _) in locks.iter() {
        if !roster.iter().any(|p| p.name == name) {
            eprintln!("warning: locked player {name:?} is not in today's roster, ignoring");
        }
    }

    let balancer = TeamBalancer {
        scoring: arg.scoring.strategy(),
        trial_budget: arg.trials,
        ..TeamBalancer::default()
    };
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let outcome = balancer.balance_with_seed(&roster, &locks, seed)?;
    let within_tolerance = outcome.within_tolerance();
    if !within_tolerance {
        eprintln!(
            "warning: no partition satisfied the skill tolerance within {} trials; \
             returning the fallback split",
            arg.trials
        );
    }

    let (gold, black) = outcome.into_teams();
    let saved = SavedTeams {
        generated_at: Utc::now(),
        seed,
        scoring: arg.scoring,
        within_tolerance,
        gold,
        black,
    };
    TeamsStore::new(data_dir).save(&saved)?;
    view::print_teams(&saved);
    Ok(())
}
