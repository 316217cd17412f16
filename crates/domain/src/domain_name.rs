use super::DomainError;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// A normalized, dot-separated ASCII domain name.
///
/// Normalization happens once, at construction: surrounding whitespace and
/// trailing root-label dots are removed and the name is lowercased. Names read
/// from the wire (`"ns1.example.com."`) and names typed by an operator
/// (`"NS1.Example.com"`) therefore compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim().trim_end_matches('.');

        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is empty",
                name
            )));
        }
        if !trimmed.is_ascii() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains non-ASCII characters",
                name
            )));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                name, MAX_NAME_LENGTH
            )));
        }

        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LENGTH {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is longer than {} characters",
                    label, MAX_LABEL_LENGTH
                )));
            }
            if label.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' contains whitespace or control characters",
                    label
                )));
            }
        }

        Ok(Self(Arc::from(trimmed.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last label, e.g. `com` for `www.example.com`.
    pub fn tld(&self) -> DomainName {
        match self.0.rsplit_once('.') {
            Some((_, last)) => Self(Arc::from(last)),
            None => self.clone(),
        }
    }

    /// Fully-qualified form with the trailing root dot, as used on the wire.
    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DomainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
