use crate::domain::model::Service;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::{
    validate_fee, validate_non_empty_string, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service catalog read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub fee: Option<f64>,
    pub required_documents: Option<String>,
}

impl ServiceEntry {
    /// 有 fee 或 required_documents 的項目視為部門服務
    pub fn to_service(&self) -> Service {
        if self.fee.is_none() && self.required_documents.is_none() {
            return Service::base(self.id, &self.name, &self.description);
        }
        Service::department(
            self.id,
            &self.name,
            &self.description,
            self.fee.unwrap_or(0.0),
            self.required_documents.as_deref().unwrap_or_default(),
        )
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入服務目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortalError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(PortalError::ConfigValidationError {
                field: "services".to_string(),
                message: "catalog must define at least one service".to_string(),
            });
        }

        validate_unique_ids("services.id", self.services.iter().map(|s| s.id))?;

        for entry in &self.services {
            validate_non_empty_string("services.name", &entry.name)?;
            if let Some(fee) = entry.fee {
                validate_fee("services.fee", fee)?;
            }
        }

        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl CatalogSource for CatalogConfig {
    fn load_services(&self) -> Result<Vec<Service>> {
        self.validate()?;
        Ok(self.services.iter().map(ServiceEntry::to_service).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"
[[services]]
id = 10
name = "Marriage Certificate"
description = "Issuance of Marriage Certificate"
fee = 75.5
required_documents = "ID Proof, Witness Statement"

[[services]]
id = 11
name = "General Inquiry"
description = "Ask a question at the front desk"
"#;

    #[test]
    fn test_parse_catalog() {
        let config = CatalogConfig::from_toml_str(CATALOG).unwrap();
        assert!(config.validate().is_ok());

        let services = config.load_services().unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].service_id, 10);
        assert_eq!(services[0].calculate_fee(), 75.5);
        assert_eq!(services[1].kind, ServiceKind::Base);
        assert_eq!(services[1].calculate_fee(), 0.0);
    }

    #[test]
    fn test_fee_only_entry_is_department() {
        let config = CatalogConfig::from_toml_str(
            r#"
[[services]]
id = 1
name = "Permit"
description = "Parking permit"
fee = 20.0
"#,
        )
        .unwrap();
        let services = config.load_services().unwrap();
        assert_eq!(services[0].required_documents(), Some(""));
        assert_eq!(services[0].calculate_fee(), 20.0);
    }

    #[test]
    fn test_validation_failures() {
        let empty = CatalogConfig::from_toml_str("").unwrap();
        assert!(matches!(
            empty.validate(),
            Err(PortalError::ConfigValidationError { .. })
        ));

        let duplicate = CatalogConfig::from_toml_str(
            r#"
[[services]]
id = 1
name = "A"
description = "a"

[[services]]
id = 1
name = "B"
description = "b"
"#,
        )
        .unwrap();
        assert!(duplicate.validate().is_err());

        let negative = CatalogConfig::from_toml_str(
            r#"
[[services]]
id = 1
name = "A"
description = "a"
fee = -5.0
"#,
        )
        .unwrap();
        assert!(negative.load_services().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CatalogConfig::from_toml_str("[[services]\nid = ").unwrap_err();
        assert!(matches!(err, PortalError::TomlError(_)));
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].name, "Marriage Certificate");
    }
}
