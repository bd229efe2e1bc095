use serde::Deserialize;
use std::path::PathBuf;

fn default_top_k() -> usize {
    10
}
fn default_verbose() -> bool {
    false
}

/// Optional config file for CLI defaults
///
/// Searched as `polycheck.toml` / `.polycheck.toml` in the working directory
/// and under the platform config directory. Flags given on the command line
/// always win over file values.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Default word count for the wordfreq subcommand
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Default extension filter for the lines subcommand
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polycheck.toml"));
    paths.push(PathBuf::from(".polycheck.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polycheck").join("config.toml"));
        paths.push(config_dir.join("polycheck.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polycheck.toml"));
        paths.push(home.join(".config").join("polycheck").join("config.toml"));
    }

    paths
}
