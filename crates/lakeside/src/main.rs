mod app;
mod logging;
mod page;
mod terminal;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use lakeside_config::Config;

use crate::{app::App, terminal::CrosstermEvents};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let config = Config::load()?;

    let terminal = ratatui::init();
    let result = run(terminal, &config);
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn run(terminal: ratatui::DefaultTerminal, config: &Config) -> color_eyre::Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)?;
    let size = terminal.size()?;
    log::info!("starting at {}x{} cells", size.width, size.height);
    App::new(config, size.width, size.height).run(terminal, &mut CrosstermEvents)
}
