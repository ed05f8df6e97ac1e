//! Test utilities and shared fixtures for the Lexicon workspace.
//!
//! These helpers are compiled for this crate's own tests and, through the
//! `testing` feature, for the unit and integration tests of the other crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Translation sources shared by the i18n and config test suites.
pub mod bundle_fixtures {
    /// Seven keys, several with multiple phrasings and templates.
    pub const NOMINAL_JSON: &str = r#"
    {
        "hi": ["this is a {{ .Test }}"],
        "with": ["all"],
        "the": ["elements", "we"],
        "can": ["find"],
        "in": ["a", "json"],
        "config": ["file", "! {{ .Author }}"],
        "parse": ["{{if $foo}}{{end}}"]
    }
    "#;

    /// Three keys, one of them already dot-joined in the source.
    pub const SECONDARY_JSON: &str = r#"
    {
        "this": ["is a {{ .Test }}"],
        "with.a.file": ["containing", "less", "variables"],
        "bye": ["see you"]
    }
    "#;

    /// Valid JSON whose top level is not an object.
    pub const ARRAY_JSON: &str = r#"
     [
        "content",
        "not",
        "ok",
        "test"
     ]
    "#;

    /// Nested command descriptions in YAML form.
    pub const COMMANDS_YAML: &str = r"
command:
  ping:
    name: ping
    description: Check that the bot answers
  greet:
    name: greet
    description:
      - Say hello to {{ .User }}
      - Wave at {{ .User }}
";
}
