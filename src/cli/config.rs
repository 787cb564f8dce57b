use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Profile-driven form autofill engine for captured page snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a page snapshot from a profile and emit the mutated snapshot
    Fill {
        /// Path to the page snapshot JSON (bridge extract format)
        #[arg(long)]
        snapshot: String,

        /// Path to the profile file (YAML or JSON)
        #[arg(long)]
        profile: Option<String>,

        /// Where to write the mutated snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Also print the dispatched-event log
        #[arg(long, default_value_t = false)]
        events: bool,
    },

    /// Detect fields in a snapshot and show their best matches without filling
    Inspect {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Optional profile to match against
        #[arg(long)]
        profile: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub trace: TraceConfig,

    /// Default profile path used when the CLI does not pass one.
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL trace file; stderr is used when absent.
    pub path: Option<String>,

    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: "warn".to_string(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the sink level: CLI verbosity wins over the config file.
pub fn resolve_trace_level(verbose: u8, config_level: &str) -> crate::trace::event::DiagLevel {
    use crate::trace::event::DiagLevel;
    match verbose {
        0 => match config_level {
            "debug" => DiagLevel::Debug,
            "info" => DiagLevel::Info,
            "error" => DiagLevel::Error,
            _ => DiagLevel::Warn,
        },
        1 => DiagLevel::Info,
        _ => DiagLevel::Debug,
    }
}
