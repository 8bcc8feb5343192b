//! Form field declarations

use serde::{Deserialize, Serialize};

/// Which validation rules apply to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A person's name: at least two characters
    Text,
    Email,
    /// Digits, spaces, hyphens, plus sign and parentheses only
    Phone,
    /// Unchecked free text such as the message body
    FreeText,
}

/// A field registered with the contact form, in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, also the id of its input element
    pub name: String,
    /// Human-readable label used in messages
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }

    /// Required name field
    pub fn name() -> Self {
        Self::new("name", "Name", FieldKind::Text, true)
    }

    /// Required email field
    pub fn email() -> Self {
        Self::new("email", "Email", FieldKind::Email, true)
    }

    /// Optional phone field
    pub fn phone() -> Self {
        Self::new("phone", "Phone number", FieldKind::Phone, false)
    }

    /// Optional message body
    pub fn message() -> Self {
        Self::new("message", "Message", FieldKind::FreeText, false)
    }

    /// Fields of the site's contact form, in form order
    pub fn contact_defaults() -> Vec<Self> {
        vec![Self::name(), Self::email(), Self::phone(), Self::message()]
    }

    /// Id of the input element
    pub fn input_id(&self) -> &str {
        &self.name
    }

    /// Id of the container around input, label and error slot
    pub fn group_id(&self) -> String {
        format!("{}-group", self.name)
    }

    /// Id of the element that receives the error message
    pub fn error_slot_id(&self) -> String {
        format!("{}-error", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_defaults_order() {
        let names: Vec<_> = FieldSpec::contact_defaults()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["name", "email", "phone", "message"]);
    }

    #[test]
    fn test_required_flags() {
        assert!(FieldSpec::name().required);
        assert!(FieldSpec::email().required);
        assert!(!FieldSpec::phone().required);
        assert!(!FieldSpec::message().required);
    }

    #[test]
    fn test_element_ids() {
        let field = FieldSpec::email();
        assert_eq!(field.input_id(), "email");
        assert_eq!(field.group_id(), "email-group");
        assert_eq!(field.error_slot_id(), "email-error");
    }

    #[test]
    fn test_deserialize_defaults_to_optional() {
        let json = r#"{"name": "suburb", "label": "Suburb", "kind": "text"}"#;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Text);
        assert!(!field.required);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FieldKind::FreeText).unwrap();
        assert_eq!(json, r#""free_text""#);
    }
}
