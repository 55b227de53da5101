//! URL-encoded form bodies with repeated fields.

use url::form_urlencoded;

/// Decoded `application/x-www-form-urlencoded` body.
///
/// Field order is preserved, so repeated fields such as `password[]` keep
/// their submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    /// Decodes a request body.
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// Returns the first value of `name`, or an empty string when absent.
    #[must_use]
    pub fn first(&self, name: &str) -> String {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Returns every value of `name` in submission order.
    #[must_use]
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }
}
