use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Remote script endpoint the form is relayed to when nothing overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwCcjlg1J2kZ1uuwH2t_50ODDQZP_N-NU-kiUWot9nfM4WLq0_XagejdhLEwaW9CVnE5Q/exec";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "contact-relay",
    version,
    about = "Contact form relay with a readable-then-opaque delivery fallback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Remote script endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to config file (default: contact-relay.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a contact message and show the outcome popup
    Send {
        /// Form fields as NAME=VALUE pairs (repeatable)
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Page URL recorded as the submission source
        #[arg(long, default_value = "cli://contact-relay")]
        source: String,

        /// Popup output format: text, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build the payload and show the truncated preview without sending
    Preview {
        /// Form fields as NAME=VALUE pairs (repeatable)
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Page URL recorded as the submission source
        #[arg(long, default_value = "cli://contact-relay")]
        source: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `contact-relay.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub endpoint: Option<String>,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_email")]
    pub email: String,

    #[serde(default = "default_contact_phone")]
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
            phone: default_contact_phone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_id")]
    pub id: String,

    #[serde(default = "default_busy_label")]
    pub busy_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            id: default_form_id(),
            busy_label: default_busy_label(),
        }
    }
}

/// Trace log is off unless a path is configured.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_contact_email() -> String {
    "oros.strategy@gmail.com".to_string()
}
fn default_contact_phone() -> String {
    "+54 9 351-567-890".to_string()
}
fn default_form_id() -> String {
    "contact-form".to_string()
}
fn default_busy_label() -> String {
    "Sending\u{2026}".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("contact-relay.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the endpoint URL: CLI > config > default.
pub fn resolve_endpoint(cli_endpoint: Option<&str>, config: &AppConfig) -> String {
    cli_endpoint
        .or(config.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}
