use validator::ValidationError;

/// Public short-link token domain type. Once constructed, guaranteed to be a
/// non-empty lowercase token of URL-safe characters, at most 64 bytes.
///
/// Anything that fails to parse can never match a stored link, so public
/// lookups may treat a parse failure as "no such link" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Parse a slug from untrusted input. Trims whitespace and lowercases.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() || normalized.len() > 64 {
            let mut error = ValidationError::new("invalid_slug");
            error.message = Some("Slug must be 1-64 characters".into());
            return Err(error);
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            let mut error = ValidationError::new("invalid_slug");
            error.message = Some("Slug may contain letters, digits, '-' and '_'".into());
            return Err(error);
        }

        Ok(Self(normalized))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
