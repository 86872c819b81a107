use std::str::FromStr;

use crate::ConfigError;

/// How a finished report is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidEnvVar {
                var: "XRESEARCH_OUTPUT_FORMAT".to_string(),
                reason: format!("unknown output format '{other}'; expected console, markdown, or json"),
            }),
        }
    }
}

/// Display limits applied by the renderers. The engine itself always keeps
/// its fixed top-N slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub influencers: usize,
    pub keywords: usize,
    pub hours: usize,
    pub urls: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            influencers: 10,
            keywords: 15,
            hours: 5,
            urls: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub output_format: OutputFormat,
    pub limits: DisplayLimits,
}
