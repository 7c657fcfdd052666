//! Flat-file persistence for the squad and the last generated teams.
//!
//! Both files live under the data directory as pretty-printed JSON. The
//! squad file is load-tolerant: a missing or unreadable file yields an
//! empty squad so a typo in `--data-dir` or a corrupted file never bricks a
//! command. The teams file, by contrast, is only read by commands that
//! require a prior generation, so there a missing file is a real error.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wicket_balancer::{BalanceSeed, RawSkillScoring, RoleWeightedScoring, ScoringStrategy};
use wicket_engine::{Player, Team};

pub(crate) const ROSTER_FILE: &str = "players.json";
pub(crate) const TEAMS_FILE: &str = "teams.json";

/// Rating interpretation used for a generation, persisted alongside the
/// teams so later commands total them the same way.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, Serialize, Deserialize,
)]
pub(crate) enum ScoringKind {
    #[default]
    Raw,
    Role,
}

impl ScoringKind {
    pub(crate) fn strategy(self) -> Box<dyn ScoringStrategy> {
        match self {
            ScoringKind::Raw => Box::new(RawSkillScoring),
            ScoringKind::Role => Box::new(RoleWeightedScoring),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    saved_at: DateTime<Utc>,
    players: Vec<Player>,
}

/// The durable squad list.
#[derive(Debug)]
pub(crate) struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub(crate) fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(ROSTER_FILE),
        }
    }

    /// Loads the squad. Missing or unreadable data yields an empty squad;
    /// loading never fails the calling command.
    pub(crate) fn load(&self) -> Vec<Player> {
        let Ok(file) = File::open(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_reader::<_, RosterFile>(BufReader::new(file)) {
            Ok(data) => data.players,
            Err(err) => {
                eprintln!(
                    "warning: ignoring unreadable squad file {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the squad wholesale.
    pub(crate) fn save(&self, players: &[Player]) -> anyhow::Result<()> {
        let data = RosterFile {
            saved_at: Utc::now(),
            players: players.to_vec(),
        };
        write_json(&self.path, &data)
    }
}

/// Persisted result of the last generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SavedTeams {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) seed: BalanceSeed,
    pub(crate) scoring: ScoringKind,
    pub(crate) within_tolerance: bool,
    pub(crate) gold: Team,
    pub(crate) black: Team,
}

/// The last generated teams, kept so `swap` and `teams` work across
/// invocations.
#[derive(Debug)]
pub(crate) struct TeamsStore {
    path: PathBuf,
}

impl TeamsStore {
    pub(crate) fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TEAMS_FILE),
        }
    }

    pub(crate) fn load(&self) -> anyhow::Result<SavedTeams> {
        let file = File::open(&self.path).with_context(|| {
            format!(
                "no generated teams found at {} (run `wicket generate` first)",
                self.path.display()
            )
        })?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse teams file: {}", self.path.display()))
    }

    pub(crate) fn save(&self, teams: &SavedTeams) -> anyhow::Result<()> {
        write_json(&self.path, teams)
    }
}

fn write_json<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}
