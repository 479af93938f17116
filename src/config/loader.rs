//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RelayError, RelayResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mortality-relay.toml";

const USER_CONFIG_DIR: &str = "mortality-relay";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A fully layered configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when only defaults and environment were used
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RelayResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RelayError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RelayError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Files tried, in order, when no `--config` is given
pub fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(USER_CONFIG_DIR).join("config.toml"));
    }
    paths
}

/// Load from the explicit file, the first existing candidate, or defaults
///
/// An explicit file that is missing is an error; a missing candidate is not.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> RelayResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths(cwd).into_iter().find(|p| p.is_file()),
    };

    let (config, warnings) = match &path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: config.with_env_overrides()?,
        path,
        warnings,
    })
}

/// Apply environment variable overrides (RELAY_* prefix)
///
/// Empty values are ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> RelayResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    // RELAY_ROOTS (platform path-list separator)
    if let Some(roots) = var("RELAY_ROOTS") {
        config.source.roots = std::env::split_paths(&roots)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
    }

    // RELAY_PATTERNS (comma-separated)
    if let Some(patterns) = var("RELAY_PATTERNS") {
        config.source.patterns = patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(dir) = var("RELAY_QUEUE_DIR") {
        config.queue.working_dir = Some(PathBuf::from(dir));
    }

    if let Some(secs) = var("RELAY_TIMEOUT_SECS") {
        config.queue.timeout_secs = secs.trim().parse().map_err(|_| RelayError::InvalidSetting {
            key: "RELAY_TIMEOUT_SECS",
            message: format!("expected a whole number of seconds, got '{}'", secs),
        })?;
    }

    if let Some(secs) = var("RELAY_PROCESS_TIMEOUT_SECS") {
        config.queue.process_timeout_secs =
            secs.trim().parse().map_err(|_| RelayError::InvalidSetting {
                key: "RELAY_PROCESS_TIMEOUT_SECS",
                message: format!("expected a whole number of seconds, got '{}'", secs),
            })?;
    }

    Ok(config)
}

/// Replace a leading `~` with the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "roots",
        "patterns",
        "queue",
        "working_dir",
        "program",
        "enqueue_args",
        "status_args",
        "process_args",
        "timeout_secs",
        "process_timeout_secs",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
