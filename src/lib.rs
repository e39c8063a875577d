pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::CatalogConfig;
pub use crate::core::{
    catalog::{BuiltinCatalog, ServiceCatalog},
    console::{CommandLoop, ExitReason, LoopState, LoopSummary, MenuChoice},
    session::{FeedbackReceipt, Session},
};
pub use crate::utils::error::{PortalError, Result};
