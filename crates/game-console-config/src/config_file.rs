use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".game-console.toml";

/// Load config file content from CWD first, then the platform config directory
///
/// Searches for:
/// 1. `.game-console.toml` in the current working directory
/// 2. `config.toml` in the game-console config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let global = global_config_path();
    read_first_existing(Path::new(LOCAL_CONFIG_FILE), global.as_deref())
}

/// Content of the local file if readable, else of the global file
fn read_first_existing(local: &Path, global: Option<&Path>) -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(local) {
        log::debug!("Loaded config from {}", local.display());
        return Some(content);
    }

    let global = global?;
    match std::fs::read_to_string(global) {
        Ok(content) => {
            log::debug!("Loaded config from {}", global.display());
            Some(content)
        }
        Err(_) => None,
    }
}

fn global_config_path() -> Option<PathBuf> {
    match crate::paths::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            log::debug!("No global config path: {:#}", e);
            None
        }
    }
}
