use serde::Serialize;

use super::field::{Field, FieldName};

/// Snapshot of a validated contact form, built right before sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub project_description: String,
}

impl FormSubmission {
    pub fn from_fields<F: Field>(fields: &[F]) -> Self {
        let value_of = |name: FieldName| {
            fields
                .iter()
                .find(|field| field.name() == name)
                .map(|field| field.value().trim().to_string())
                .unwrap_or_default()
        };

        Self {
            first_name: value_of(FieldName::FirstName),
            last_name: value_of(FieldName::LastName),
            email: value_of(FieldName::Email),
            phone: value_of(FieldName::Phone),
            project_description: value_of(FieldName::Project),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn to_payload(&self) -> RelayPayload {
        let name = self.full_name();
        RelayPayload {
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message_body(),
            reply_to: self.email.clone(),
            subject: format!("New Project Inquiry from {}", name),
            name,
        }
    }

    fn message_body(&self) -> String {
        format!(
            "New project inquiry from the Luxe Living website\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             \n\
             Project Description:\n\
             {}\n",
            self.full_name(),
            self.email,
            self.phone,
            self.project_description,
        )
    }
}

/// JSON body the email relay expects.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RelayPayload {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::field::FieldState;
    use pretty_assertions::assert_eq;

    fn sample() -> FormSubmission {
        FormSubmission {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@x.com".to_string(),
            phone: "9876543210".to_string(),
            project_description: "Need a 3-bedroom renovation".to_string(),
        }
    }

    #[test]
    fn test_from_fields_trims_values() {
        let mut fields = FieldState::contact_fields();
        let values = ["  Jo", "Doe ", "jo@x.com", "9876543210", "Need a 3-bedroom renovation\n"];
        for (field, value) in fields.iter_mut().zip(values) {
            field.set_value(value);
        }

        assert_eq!(FormSubmission::from_fields(&fields), sample());
    }

    #[test]
    fn test_payload_fields() {
        let payload = sample().to_payload();
        assert_eq!(payload.name, "Jo Doe");
        assert_eq!(payload.reply_to, "jo@x.com");
        assert_eq!(payload.subject, "New Project Inquiry from Jo Doe");
        assert!(payload.message.contains("Need a 3-bedroom renovation"));
        assert!(payload.message.contains("Phone: 9876543210"));
    }

    #[test]
    fn test_payload_uses_relay_key_names() {
        let json = serde_json::to_value(sample().to_payload()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["_replyto", "_subject", "email", "message", "name", "phone"]);
        assert_eq!(json["_replyto"], "jo@x.com");
    }
}
