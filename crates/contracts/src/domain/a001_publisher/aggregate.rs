use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

/// Maximum number of emails and of phone numbers kept per publisher
pub const MAX_CONTACTS: usize = 3;

// ============================================================================
// ID Type
// ============================================================================

/// Publisher id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for PublisherId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(PublisherId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Publisher (editorial) supplying books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: PublisherId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(default)]
    pub emails: Vec<String>,

    #[serde(rename = "telefonos", default)]
    pub phones: Vec<String>,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Publisher {
    /// Form data for editing this publisher
    pub fn to_dto(&self) -> PublisherDto {
        PublisherDto {
            id: Some(self.id.value()),
            name: self.name.clone(),
            emails: self.emails.clone(),
            phones: self.phones.clone(),
            active: self.active,
        }
    }
}

impl AggregateRoot for Publisher {
    type Id = PublisherId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "publisher"
    }

    fn element_name() -> &'static str {
        "Editorial"
    }

    fn list_name() -> &'static str {
        "Editoriales"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a publisher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherDto {
    pub id: Option<i64>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(default)]
    pub emails: Vec<String>,

    #[serde(rename = "telefonos", default)]
    pub phones: Vec<String>,

    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for PublisherDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            emails: vec![String::new()],
            phones: vec![String::new()],
            active: true,
        }
    }
}

impl PublisherDto {
    /// Copy with trimmed values and blank contact entries removed.
    /// This is the shape that goes over the wire.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            emails: normalize_contacts(&self.emails),
            phones: normalize_contacts(&self.phones),
            active: self.active,
        }
    }

    /// Validation of the normalized form
    pub fn validate(&self) -> Result<(), String> {
        let n = self.normalized();
        if n.name.is_empty() {
            return Err("El nombre de la editorial es obligatorio".into());
        }
        if n.emails.len() > MAX_CONTACTS {
            return Err(format!("Como máximo {} emails", MAX_CONTACTS));
        }
        if n.phones.len() > MAX_CONTACTS {
            return Err(format!("Como máximo {} teléfonos", MAX_CONTACTS));
        }
        if let Some(bad) = n.emails.iter().find(|e| !is_plausible_email(e)) {
            return Err(format!("Email no válido: {}", bad));
        }
        Ok(())
    }

    /// Add an empty email input; false once the cap is reached
    pub fn add_email_slot(&mut self) -> bool {
        push_slot(&mut self.emails)
    }

    /// Add an empty phone input; false once the cap is reached
    pub fn add_phone_slot(&mut self) -> bool {
        push_slot(&mut self.phones)
    }
}

fn push_slot(list: &mut Vec<String>) -> bool {
    if list.len() >= MAX_CONTACTS {
        return false;
    }
    list.push(String::new());
    true
}

/// Trim entries and drop the blank ones, keeping order
pub fn normalize_contacts(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

// ============================================================================
// Read models
// ============================================================================

/// Publisher having at least one placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherWithOrders {
    pub id: PublisherId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "numeroPedidos")]
    pub order_count: u32,
}

/// Publisher having at least one book with units pending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherWithPending {
    pub id: PublisherId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "librosPendientes")]
    pub pending_books: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(emails: &[&str], phones: &[&str]) -> PublisherDto {
        PublisherDto {
            id: None,
            name: "Anaya".into(),
            emails: emails.iter().map(|s| s.to_string()).collect(),
            phones: phones.iter().map(|s| s.to_string()).collect(),
            active: true,
        }
    }

    #[test]
    fn test_blank_contacts_are_dropped() {
        let d = dto(&["", " pedidos@anaya.es ", "  "], &["912345678", ""]);
        let n = d.normalized();
        assert_eq!(n.emails, vec!["pedidos@anaya.es"]);
        assert_eq!(n.phones, vec!["912345678"]);
    }

    #[test]
    fn test_contact_slots_are_capped() {
        let mut d = PublisherDto::default();
        assert!(d.add_email_slot());
        assert!(d.add_email_slot());
        assert!(!d.add_email_slot());
        assert_eq!(d.emails.len(), MAX_CONTACTS);
    }

    #[test]
    fn test_validate() {
        assert!(dto(&["a@b.es"], &[]).validate().is_ok());
        assert!(dto(&["sin-arroba"], &[]).validate().is_err());
        assert!(dto(&["a@b.es", "c@d.es", "e@f.es", "g@h.es"], &[])
            .validate()
            .is_err());

        let mut unnamed = dto(&[], &[]);
        unnamed.name = "   ".into();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(dto(&["a@b.es"], &["600"]).normalized()).unwrap();
        assert_eq!(json["nombre"], "Anaya");
        assert_eq!(json["telefonos"][0], "600");
        assert_eq!(json["activo"], true);
    }
}
