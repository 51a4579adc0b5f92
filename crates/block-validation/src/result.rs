//! Validation result types.

use serde::{Deserialize, Serialize};

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Field path, e.g. `bgpSettings.asn` or `addressPrefixes[1]`.
    pub name: String,
    pub message: String,
}

/// Every violation found in one validation pass, in the order found.
///
/// Serializes as a JSON array of `{name, message}` records; `Display` renders
/// that same JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", failures_json(.0))]
pub struct ValidationErrors(Vec<ValidationFailure>);

fn failures_json(failures: &[ValidationFailure]) -> String {
    serde_json::to_string(failures).unwrap_or_default()
}

impl ValidationErrors {
    pub fn push(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.push(ValidationFailure {
            name: name.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was violated, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<ValidationFailure>> for ValidationErrors {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_json_list() {
        let mut errors = ValidationErrors::default();
        errors.push("ipAddress", "Value must be a valid IP address");

        assert_eq!(
            errors.to_string(),
            r#"[{"name":"ipAddress","message":"Value must be a valid IP address"}]"#
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::default().into_result().is_ok());

        let mut errors = ValidationErrors::default();
        errors.push("name", "bad");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_serialization_roundtrip_is_transparent() {
        let json = r#"[{"name":"a","message":"b"}]"#;
        let parsed: ValidationErrors = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.iter().next().unwrap().name, "a");
    }
}
