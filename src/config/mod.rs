pub mod toml_config;

pub use toml_config::CatalogConfig;

#[cfg(feature = "cli")]
use crate::core::catalog::{BuiltinCatalog, ServiceCatalog};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "civic-portal")]
#[command(about = "Interactive console for registering and browsing public services")]
pub struct CliConfig {
    /// TOML file with the service catalog (built-in demo services when omitted)
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-command session statistics")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_catalog(&self) -> Result<ServiceCatalog> {
        match &self.catalog {
            Some(path) => {
                tracing::info!("📁 Loading service catalog from: {}", path);
                ServiceCatalog::from_source(&CatalogConfig::from_file(path)?)
            }
            None => ServiceCatalog::from_source(&BuiltinCatalog),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        Ok(())
    }
}
