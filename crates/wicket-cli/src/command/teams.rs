use std::path::Path;

use crate::{store::TeamsStore, view};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TeamsArg {}

pub(crate) fn run(data_dir: &Path, _arg: &TeamsArg) -> anyhow::Result<()> {
    let saved = TeamsStore::new(data_dir).load()?;
    view::print_teams(&saved);
    Ok(())
}
