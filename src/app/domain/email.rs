use validator::ValidationError;

/// A normalized email address. Dashboard logins and field-agent contact
/// addresses both go through here, so every stored email is trimmed and
/// lowercased before it hits the database.
#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub fn new(email: String) -> Result<Self, ValidationError> {
        let normalized = email.trim().to_lowercase();

        // RFC 5321 address length cap
        if normalized.len() > 254 {
            let mut error = ValidationError::new("email_too_long");
            error.message = Some("Email address is too long".into());
            return Err(error);
        }

        // Enough structure to be deliverable: local part, @, dotted domain.
        let has_dotted_domain = normalized
            .split_once('@')
            .map_or(false, |(local, domain)| !local.is_empty() && domain.contains('.'));
        if has_dotted_domain {
            Ok(Self(normalized))
        } else {
            let mut error = ValidationError::new("invalid_email");
            error.message = Some("Invalid email address format".into());
            Err(error)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
