//! Log file setup.
//!
//! The terminal is in the alternate screen while the app runs, so log lines
//! go to a file instead of stderr, and only when `RUST_LOG` asks for them.

use std::fs::{self, File};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;

const LOG_FILE: &str = "lakeside.log";

pub fn init() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let Some(dirs) = ProjectDirs::from("", "", "lakeside") else {
        return Ok(());
    };
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path).wrap_err_with(|| format!("failed to open {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;
    log::info!("logging to {}", path.display());
    Ok(())
}
