mod command;
mod screens;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
