use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::Result;

/// Load configuration the way every command does.
///
/// `--no-config` skips all files. An explicit path is loaded as is;
/// otherwise the loader's search order applies.
///
/// # Errors
/// Returns an error if a config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), config_path, no_config)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    match &loaded.source {
        Some(source) => tracing::info!(config = %source.display(), "loaded configuration"),
        None => tracing::debug!("using built-in configuration"),
    }
    Ok(loaded)
}

/// Project root the configured directories are relative to.
///
/// An explicit `--root` wins. Otherwise `paths.results_root` is resolved
/// against the config file's directory, or `cwd` for built-in defaults.
#[must_use]
pub fn resolve_root(explicit: Option<&Path>, loaded: &LoadResult, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    let base = loaded
        .source
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| cwd.to_path_buf(), |p| cwd.join(p));
    base.join(&loaded.config.paths.results_root)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
