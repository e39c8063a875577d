use crate::domain::model::Service;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

fn demo_services() -> Vec<Service> {
    vec![
        Service::department(
            1,
            "Birth Certificate",
            "Issuance of Birth Certificate",
            50.0,
            "ID Proof",
        ),
        Service::department(
            2,
            "Residence Certificate",
            "Issuance of Residence Certificate",
            200.0,
            "Application Form, ID Proof",
        ),
    ]
}

/// The demo services every run starts with when no catalog file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_services(&self) -> Result<Vec<Service>> {
        Ok(demo_services())
    }
}

/// Fixed, ordered set of services. Read-only once built.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn from_source<S: CatalogSource>(source: &S) -> Result<Self> {
        let services = source.load_services()?;
        tracing::debug!("Loaded {} services into the catalog", services.len());
        Ok(Self::new(services))
    }

    pub fn demo() -> Self {
        Self::new(demo_services())
    }

    pub fn list_all(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, service_id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.service_id == service_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// 依建立順序列出所有服務，服務之間空一行
    pub fn render(&self) -> String {
        let body = self
            .services
            .iter()
            .map(Service::display_info)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("Available Services:\n{}", body)
    }
}
