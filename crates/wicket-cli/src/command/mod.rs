use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod generate;
mod roster;
mod swap;
mod teams;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Directory holding the persisted squad and teams files
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Add a player to the squad (replaces an existing player of the same name)
    Add(#[clap(flatten)] roster::AddArg),
    /// Change ratings, role or availability of a player
    Edit(#[clap(flatten)] roster::EditArg),
    /// Remove a player from the squad
    Remove(#[clap(flatten)] roster::RemoveArg),
    /// Show the squad
    List(#[clap(flatten)] roster::ListArg),
    /// Split today's players into two balanced teams
    Generate(#[clap(flatten)] generate::GenerateArg),
    /// Exchange one Gold player with one Black player
    Swap(#[clap(flatten)] swap::SwapArg),
    /// Show the last generated teams
    Teams(#[clap(flatten)] teams::TeamsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let data_dir = &args.data_dir;
    match args.mode.unwrap_or(Mode::List(roster::ListArg::default())) {
        Mode::Add(arg) => roster::run_add(data_dir, &arg),
        Mode::Edit(arg) => roster::run_edit(data_dir, &arg),
        Mode::Remove(arg) => roster::run_remove(data_dir, &arg),
        Mode::List(arg) => roster::run_list(data_dir, &arg),
        Mode::Generate(arg) => generate::run(data_dir, &arg),
        Mode::Swap(arg) => swap::run(data_dir, &arg),
        Mode::Teams(arg) => teams::run(data_dir, &arg),
    }
}
