use crate::domain::model::Service;
use crate::utils::error::Result;

pub trait Contactable {
    fn email(&self) -> &str;
    fn phone_number(&self) -> &str;
    fn update_contact_info(&mut self, new_email: String, new_phone_number: String);
}

/// Where the service catalog comes from (built-in demo data or a catalog file).
pub trait CatalogSource {
    fn load_services(&self) -> Result<Vec<Service>>;
}
