use std::path::Path;

use crate::{store::TeamsStore, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SwapArg {
    /// Player currently in team Gold
    gold_name: String,
    /// Player currently in team Black
    black_name: String,
}

pub(crate) fn run(data_dir: &Path, arg: &SwapArg) -> anyhow::Result<()> {
    let store = TeamsStore::new(data_dir);
    let mut saved = store.load()?;

    saved
        .gold
        .swap_player(&mut saved.black, &arg.gold_name, &arg.black_name)?;

    store.save(&saved)?;
    view::print_teams(&saved);
    Ok(())
}
