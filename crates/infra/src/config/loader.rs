//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from an explicit config file, or the first probed one
//! 2. Fall back to built-in defaults when no file exists
//! 3. Apply environment variable overrides on top
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TRIPSCOPE_CACHE_PATH`: Coordinate cache file path
//! - `TRIPSCOPE_SEED_CACHE`: Seed a missing cache with known cities (true/false)
//! - `TRIPSCOPE_PARALLEL_IMPORT`: Build trips on the thread pool (true/false)
//! - `TRIPSCOPE_DESCRIPTION_MAX_LEN`: Characters of description kept per trip
//! - `TRIPSCOPE_LOG_LEVEL`: Default log filter (overridden by `RUST_LOG`)
//! - `TRIPSCOPE_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tripscope.json` or `./tripscope.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use tripscope_domain::{Config, Result, TripscopeError};

const ENV_CACHE_PATH: &str = "TRIPSCOPE_CACHE_PATH";
const ENV_SEED_CACHE: &str = "TRIPSCOPE_SEED_CACHE";
const ENV_PARALLEL_IMPORT: &str = "TRIPSCOPE_PARALLEL_IMPORT";
const ENV_DESCRIPTION_MAX_LEN: &str = "TRIPSCOPE_DESCRIPTION_MAX_LEN";
const ENV_LOG_LEVEL: &str = "TRIPSCOPE_LOG_LEVEL";
const ENV_LOG_JSON: &str = "TRIPSCOPE_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["tripscope.json", "tripscope.toml", "config.json", "config.toml"];

/// Load configuration from the probed file (or defaults) plus environment
/// overrides.
///
/// # Errors
/// Returns `TripscopeError::Config` if a probed file is invalid or an
/// override has an invalid value.
pub fn load() -> Result<Config> {
    load_with(None)
}

/// Load configuration with an optional explicit file.
///
/// An explicit path must exist. Without one, the standard locations are
/// probed and a missing file means defaults.
///
/// # Errors
/// Returns `TripscopeError::Config` if the file is missing (explicit path
/// only), unreadable or malformed, or an override is invalid.
pub fn load_with(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(&path)?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(&found)?,
            None => {
                tracing::debug!("config.defaults_used");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from environment variables on top of the defaults.
///
/// # Errors
/// Returns `TripscopeError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overwrite fields whose environment variable is set.
///
/// # Errors
/// Returns `TripscopeError::Config` if a numeric variable does not parse.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(path) = env_var(ENV_CACHE_PATH) {
        config.geo.cache_path = PathBuf::from(path);
    }
    config.geo.seed_defaults = env_bool(ENV_SEED_CACHE, config.geo.seed_defaults);
    config.import.parallel = env_bool(ENV_PARALLEL_IMPORT, config.import.parallel);

    if let Some(raw) = env_var(ENV_DESCRIPTION_MAX_LEN) {
        config.import.description_max_len = raw.parse::<usize>().map_err(|e| {
            TripscopeError::Config(format!("Invalid {ENV_DESCRIPTION_MAX_LEN}: {e}"))
        })?;
    }

    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(())
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TripscopeError::Config` if:
/// - File not found
/// - File format is invalid
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(TripscopeError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "config.loading_file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| TripscopeError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TripscopeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TripscopeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TripscopeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

/// Non-empty environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_var(key)
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 6] = [
        ENV_CACHE_PATH,
        ENV_SEED_CACHE,
        ENV_PARALLEL_IMPORT,
        ENV_DESCRIPTION_MAX_LEN,
        ENV_LOG_LEVEL,
        ENV_LOG_JSON,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn write_temp(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        let truthy =
            [("TEST_TS_BOOL_1", "1"), ("TEST_TS_BOOL_YES", "YES"), ("TEST_TS_BOOL_ON", "on")];
        for (key, value) in truthy {
            std::env::set_var(key, value);
            assert!(env_bool(key, false), "{value} should be true");
            std::env::remove_var(key);
        }

        let falsy =
            [("TEST_TS_BOOL_0", "0"), ("TEST_TS_BOOL_NO", "no"), ("TEST_TS_BOOL_OFF", "off")];
        for (key, value) in falsy {
            std::env::set_var(key, value);
            assert!(!env_bool(key, true), "{value} should be false");
            std::env::remove_var(key);
        }

        std::env::remove_var("TEST_TS_BOOL_MISSING");
        assert!(env_bool("TEST_TS_BOOL_MISSING", true));
        assert!(!env_bool("TEST_TS_BOOL_MISSING", false));
    }

    #[test]
    fn test_load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_env_overrides() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CACHE_PATH, "/tmp/tripscope-cache.json");
        std::env::set_var(ENV_SEED_CACHE, "false");
        std::env::set_var(ENV_PARALLEL_IMPORT, "0");
        std::env::set_var(ENV_DESCRIPTION_MAX_LEN, "80");
        std::env::set_var(ENV_LOG_LEVEL, "debug");
        std::env::set_var(ENV_LOG_JSON, "true");

        let config = load_from_env().unwrap();
        clear_env();

        assert_eq!(config.geo.cache_path, PathBuf::from("/tmp/tripscope-cache.json"));
        assert!(!config.geo.seed_defaults);
        assert!(!config.import.parallel);
        assert_eq!(config.import.description_max_len, 80);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_DESCRIPTION_MAX_LEN, "lots");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(TripscopeError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let path = write_temp("[logging]\nlevel = \"warn\"\njson = false\n", "toml");
        std::env::set_var(ENV_LOG_JSON, "yes");

        let config = load_with(Some(path.clone())).unwrap();
        clear_env();
        std::fs::remove_file(path).ok();

        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_finds_config_in_working_directory() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tripscope.toml"), "[import]\nparallel = false\n").unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"import": {"parallel": true}}"#)
            .unwrap();

        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        std::env::set_var(ENV_LOG_LEVEL, "trace");
        let result = load();
        std::env::set_current_dir(previous).unwrap();
        clear_env();

        let config = result.unwrap();
        assert!(!config.import.parallel, "tripscope.toml should win over config.json");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_load_from_file_json() {
        let path = write_temp(
            r#"{
                "import": { "description_max_len": 120, "parallel": false },
                "geo": { "cache_path": "trips/coords.json" }
            }"#,
            "json",
        );

        let config = load_from_file(&path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(config.import.description_max_len, 120);
        assert!(!config.import.parallel);
        assert_eq!(config.geo.cache_path, PathBuf::from("trips/coords.json"));
        assert!(config.geo.seed_defaults);
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = write_temp("[geo]\nseed_defaults = false\n", "toml");

        let config = load_from_file(&path).unwrap();
        std::fs::remove_file(path).ok();

        assert!(!config.geo.seed_defaults);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Path::new("/nonexistent/tripscope.json"));
        assert!(matches!(result, Err(TripscopeError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = write_temp(r#"{ "import": { "parallel": "#, "json");

        let result = load_from_file(&path);
        std::fs::remove_file(path).ok();

        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("level: info", &PathBuf::from("tripscope.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
