//! Analysis configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the tunable analysis options.

mod defaults;

// Re-export public types
pub use defaults::AnalysisOptions;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["hueprint.yml", "hueprint.yaml"];

/// Public handle that stores the loaded options, their source path, and warnings.
pub struct AnalysisConfigHandle {
    pub options: AnalysisOptions,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl AnalysisConfigHandle {
    fn with_options(options: AnalysisOptions, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            options,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct AnalysisConfigFile {
    analysis: AnalysisOptions,
}

/// Load analysis options from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; the first file that parses wins. Files
/// that exist but fail to read or parse contribute a warning and the search
/// continues, so a broken config never aborts an analysis run.
pub fn load_analysis_config(custom_path: Option<&Path>) -> AnalysisConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<AnalysisConfigFile>(&contents) {
                Ok(config) => {
                    let mut options = config.analysis;
                    warnings.extend(options.sanitize());
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return AnalysisConfigHandle::with_options(options, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse analysis config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read analysis config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No analysis config found; using built-in defaults.".to_string());
    AnalysisConfigHandle::with_options(AnalysisOptions::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("HUEPRINT_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(config_dir.join("hueprint").join(name));
        }
    }

    candidates
}

static ANALYSIS_CONFIG_HANDLE: OnceLock<AnalysisConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global analysis configuration (loaded once per process).
pub fn analysis_config_handle() -> &'static AnalysisConfigHandle {
    ANALYSIS_CONFIG_HANDLE.get_or_init(|| load_analysis_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = analysis_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[hueprint] Loaded analysis config from {}", source.display());
        } else {
            eprintln!("[hueprint] Using built-in analysis defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[hueprint] Config warning: {}", warning);
        }
    });
}
