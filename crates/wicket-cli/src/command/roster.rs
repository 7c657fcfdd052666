use std::path::Path;

use anyhow::bail;
use wicket_engine::{Player, Role, SKILL_MAX};

use crate::{store::RosterStore, view};

fn rating_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=i64::from(SKILL_MAX))
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AddArg {
    /// Player name (unique within the squad)
    name: String,
    #[arg(long, value_parser = rating_parser(), default_value_t = 5)]
    batting: u8,
    #[arg(long, value_parser = rating_parser(), default_value_t = 5)]
    bowling: u8,
    /// Extra influence points for captains or key players; counted double
    /// toward overall strength
    #[arg(long, value_parser = rating_parser(), default_value_t = 0)]
    booster: u8,
    /// batsman, bowler or all-rounder
    #[arg(long)]
    role: Option<Role>,
}

pub(crate) fn run_add(data_dir: &Path, arg: &AddArg) -> anyhow::Result<()> {
    let store = RosterStore::new(data_dir);
    let mut players = store.load();

    let mut player = Player::new(&arg.name, arg.batting, arg.bowling, arg.booster);
    player.role = arg.role;

    // last write wins on a duplicate name
    players.retain(|p| p.name != player.name);
    players.push(player);
    store.save(&players)?;

    println!("added {:?} ({} player(s) in squad)", arg.name, players.len());
    Ok(())
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EditArg {
    name: String,
    #[arg(long, value_parser = rating_parser())]
    batting: Option<u8>,
    #[arg(long, value_parser = rating_parser())]
    bowling: Option<u8>,
    #[arg(long, value_parser = rating_parser())]
    booster: Option<u8>,
    /// batsman, bowler or all-rounder
    #[arg(long)]
    role: Option<Role>,
    /// Available for today's selection (true/false)
    #[arg(long)]
    playing: Option<bool>,
}

pub(crate) fn run_edit(data_dir: &Path, arg: &EditArg) -> anyhow::Result<()> {
    let store = RosterStore::new(data_dir);
    let mut players = store.load();

    let Some(player) = players.iter_mut().find(|p| p.name == arg.name) else {
        bail!("no player named {:?} in the squad", arg.name);
    };
    if let Some(batting) = arg.batting {
        player.batting = batting;
    }
    if let Some(bowling) = arg.bowling {
        player.bowling = bowling;
    }
    if let Some(booster) = arg.booster {
        player.booster = booster;
    }
    if let Some(role) = arg.role {
        player.role = Some(role);
    }
    if let Some(playing) = arg.playing {
        player.playing = playing;
    }

    store.save(&players)?;
    println!("updated {:?}", arg.name);
    Ok(())
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RemoveArg {
    name: String,
}

pub(crate) fn run_remove(data_dir: &Path, arg: &RemoveArg) -> anyhow::Result<()> {
    let store = RosterStore::new(data_dir);
    let mut players = store.load();

    let before = players.len();
    players.retain(|p| p.name != arg.name);
    if players.len() == before {
        bail!("no player named {:?} in the squad", arg.name);
    }

    store.save(&players)?;
    println!("removed {:?}", arg.name);
    Ok(())
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ListArg {}

pub(crate) fn run_list(data_dir: &Path, _arg: &ListArg) -> anyhow::Result<()> {
    let players = RosterStore::new(data_dir).load();
    view::print_squad(&players);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_arg(name: &str, batting: u8, bowling: u8, booster: u8) -> AddArg {
        AddArg {
            name: name.to_owned(),
            batting,
            bowling,
            booster,
            role: None,
        }
    }

    #[test]
    fn test_add_replaces_player_with_same_name() {
        let dir = tempfile::tempdir().unwrap();

        run_add(dir.path(), &add_arg("Asha", 7, 4, 0)).unwrap();
        run_add(dir.path(), &add_arg("Asha", 2, 9, 1)).unwrap();

        let players = RosterStore::new(dir.path()).load();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].batting, 2);
        assert_eq!(players[0].booster, 1);
    }

    #[test]
    fn test_edit_updates_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        run_add(dir.path(), &add_arg("Asha", 7, 4, 0)).unwrap();

        let arg = EditArg {
            name: "Asha".to_owned(),
            batting: None,
            bowling: Some(6),
            booster: None,
            role: Some(Role::Bowler),
            playing: Some(false),
        };
        run_edit(dir.path(), &arg).unwrap();

        let players = RosterStore::new(dir.path()).load();
        assert_eq!(players[0].batting, 7);
        assert_eq!(players[0].bowling, 6);
        assert_eq!(players[0].role, Some(Role::Bowler));
        assert!(!players[0].playing);
    }

    #[test]
    fn test_edit_unknown_player_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let arg = EditArg {
            name: "Ghost".to_owned(),
            batting: Some(1),
            bowling: None,
            booster: None,
            role: None,
            playing: None,
        };
        assert!(run_edit(dir.path(), &arg).is_err());
    }

    #[test]
    fn test_remove_unknown_player_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        run_add(dir.path(), &add_arg("Asha", 7, 4, 0)).unwrap();

        let arg = RemoveArg {
            name: "Ghost".to_owned(),
        };
        assert!(run_remove(dir.path(), &arg).is_err());

        let arg = RemoveArg {
            name: "Asha".to_owned(),
        };
        run_remove(dir.path(), &arg).unwrap();
        assert!(RosterStore::new(dir.path()).load().is_empty());
    }
}
