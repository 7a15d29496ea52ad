use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, custom_path: Option<&str>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        edit_config,
        editor,
    } = cmd
    {
        let config_path = Config::resolve_path(custom_path);

        if *path {
            println!("{}", config_path.display());
        }

        if *print_config {
            println!("📄 Current settings:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialization failed: {e}")))?;
            println!("{yaml}");
            for c in &cfg.criteria {
                println!("  criterion [{}]: {} {} {}", c.id, c.kind.as_str(), c.op.as_str(), c.value);
            }
            println!(
                "window {}~{}, {} class capacities configured",
                cfg.work_start,
                cfg.work_end,
                cfg.capacities.len(),
            );
        }

        if *edit_config {
            if !config_path.exists() {
                Config::init_all(custom_path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&config_path).status();

            match status {
                Ok(s) if s.success() => {
                    success(format!("Settings edited with '{editor_to_use}'"));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    let fallback = Command::new(&default_editor).arg(&config_path).status();
                    match fallback {
                        Ok(s) if s.success() => {
                            success(format!("Settings edited with fallback '{default_editor}'"));
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit settings with fallback '{default_editor}'"
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
