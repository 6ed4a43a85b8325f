use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".devconsole.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.devconsole.toml` in the current working directory
/// 2. `.devconsole.toml` in the home directory
/// 3. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }
    match crate::paths::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No app config directory: {}", e),
    }
    paths
}

/// Returns ~/.devconsole.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_dir_is_searched_first() {
        let paths = candidates();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));
        assert!(paths.len() >= 2 || env::var_os("HOME").is_none());
    }
}
