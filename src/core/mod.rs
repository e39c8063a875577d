pub mod catalog;
pub mod console;
pub mod session;

pub use crate::domain::model::{NewUser, Service, ServiceKind, User};
pub use crate::domain::ports::{CatalogSource, Contactable};
pub use crate::utils::error::Result;
