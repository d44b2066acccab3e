use sidewinder_engine::{Grid, SpawnSeed};

use crate::{
    screens::MenuScreen,
    tui::{Runtime, ScreenStack},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board size in cells, wall ring included
    #[clap(long, default_value_t = Grid::DEFAULT_SIZE)]
    size: u8,
    /// 32-character hex seed for a reproducible session; in-game restarts replay the same session
    #[clap(long)]
    seed: Option<SpawnSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { size, seed } = arg;

    let grid = Grid::new(*size)?;
    let mut app = ScreenStack::new(Box::new(MenuScreen::new(grid, *seed)));

    Runtime::new().run(&mut app)?;

    Ok(())
}
