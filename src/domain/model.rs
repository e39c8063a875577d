use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u32);

impl PersonId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out person ids starting at 1. Ids are never reused.
#[derive(Debug)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> PersonId {
        let id = PersonId(self.next);
        self.next += 1;
        id
    }

    /// 已發出的 id 數量
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub user_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: PersonId,
    name: String,
    email: String,
    phone_number: String,
    address: String,
    user_type: String,
}

impl User {
    pub fn new(ids: &mut IdSequence, details: NewUser) -> Self {
        Self {
            id: ids.next_id(),
            name: details.name,
            email: details.email,
            phone_number: details.phone_number,
            address: details.address,
            user_type: details.user_type,
        }
    }

    /// Copies every field but takes a fresh id, so the copy is a distinct person.
    pub fn duplicate(&self, ids: &mut IdSequence) -> Self {
        Self {
            id: ids.next_id(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn display_info(&self) -> String {
        format!(
            "User ID: {}, Name: {}, Email: {}, Phone: {}",
            self.id, self.name, self.email, self.phone_number
        )
    }
}

impl crate::domain::ports::Contactable for User {
    fn email(&self) -> &str {
        &self.email
    }

    fn phone_number(&self) -> &str {
        &self.phone_number
    }

    fn update_contact_info(&mut self, new_email: String, new_phone_number: String) {
        self.email = new_email;
        self.phone_number = new_phone_number;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceKind {
    Base,
    Department {
        fee: f64,
        required_documents: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub service_id: u32,
    pub service_name: String,
    pub description: String,
    pub kind: ServiceKind,
}

impl Service {
    pub fn base(service_id: u32, service_name: &str, description: &str) -> Self {
        Self {
            service_id,
            service_name: service_name.to_string(),
            description: description.to_string(),
            kind: ServiceKind::Base,
        }
    }

    pub fn department(
        service_id: u32,
        service_name: &str,
        description: &str,
        fee: f64,
        required_documents: &str,
    ) -> Self {
        Self {
            service_id,
            service_name: service_name.to_string(),
            description: description.to_string(),
            kind: ServiceKind::Department {
                fee,
                required_documents: required_documents.to_string(),
            },
        }
    }

    pub fn calculate_fee(&self) -> f64 {
        match &self.kind {
            ServiceKind::Base => 0.0,
            ServiceKind::Department { fee, .. } => *fee,
        }
    }

    pub fn required_documents(&self) -> Option<&str> {
        match &self.kind {
            ServiceKind::Base => None,
            ServiceKind::Department {
                required_documents, ..
            } => Some(required_documents),
        }
    }

    pub fn display_info(&self) -> String {
        let mut lines = vec![
            format!("Service ID: {}", self.service_id),
            format!("Service Name: {}", self.service_name),
            format!("Description: {}", self.description),
            format!("Fee: {}", format_fee(self.calculate_fee())),
        ];
        if let Some(documents) = self.required_documents() {
            lines.push(format!("Required Documents: {}", documents));
        }
        lines.join("\n")
    }
}

/// Renders a fee the way a Java `double` prints: `50.0`, `12.75`, and
/// scientific form (`1.0E7`, `1.0E-4`) outside `[1e-3, 1e7)`.
pub fn format_fee(fee: f64) -> String {
    if fee.is_nan() {
        return "NaN".to_string();
    }
    if fee.is_infinite() {
        let label = if fee > 0.0 { "Infinity" } else { "-Infinity" };
        return label.to_string();
    }

    let magnitude = fee.abs();
    if fee == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = format!("{}", fee);
        return if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        };
    }

    // 科學記號：尾數至少一位小數，指數以 E 分隔
    let scientific = format!("{:e}", fee);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}
