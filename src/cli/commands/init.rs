use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Create the settings file with default values.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() {
        warning(format!(
            "Settings file already exists: {} (left unchanged)",
            path.display()
        ));
        return Ok(());
    }

    let written = Config::init_all(cli.config.as_deref())?;
    success(format!("Settings file created: {}", written.display()));
    Ok(())
}
