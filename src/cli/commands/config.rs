use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// View or edit the YAML configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Configuration ({}):\n", path.display());
            match serde_yaml::to_string(cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => error(format!("Failed to render configuration: {}", e)),
            }
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            let status = Command::new(&chosen).arg(&path).status();
            match status {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{}'.", chosen));
                }
                _ if chosen != fallback => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'.",
                        chosen, fallback
                    ));
                    match Command::new(&fallback).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!("Configuration edited with '{}'.", fallback));
                        }
                        _ => error(format!("Failed to edit configuration with '{}'.", fallback)),
                    }
                }
                _ => error(format!("Failed to edit configuration with '{}'.", chosen)),
            }
        }
    }

    Ok(())
}
