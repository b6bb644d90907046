//! Registry handle type

use crate::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A registry handle in `name@domain` form.
///
/// Storage is case-preserving so the handle displays as the user entered it;
/// comparison and hashing are case-insensitive, matching registry semantics.
#[derive(Debug, Clone)]
pub struct Handle(String);

const MAX_HANDLE_LEN: usize = 64;
const MAX_PART_LEN: usize = 62;

impl Handle {
    /// Parse a handle, enforcing the registry format.
    ///
    /// Both parts are alphanumeric plus `-`, with no leading or trailing
    /// `-`, and the whole handle is at most 64 characters.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidHandle(raw.to_string());

        if raw.len() > MAX_HANDLE_LEN {
            return Err(invalid());
        }
        let (name, domain) = raw.split_once('@').ok_or_else(invalid)?;
        for part in [name, domain] {
            if part.is_empty() || part.len() > MAX_PART_LEN {
                return Err(invalid());
            }
            if !part
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            {
                return Err(invalid());
            }
            if part.starts_with('-') || part.ends_with('-') {
                return Err(invalid());
            }
        }

        Ok(Self(raw.to_string()))
    }

    /// Handle as entered by the user.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for comparison, cache keys and registry queries.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Handle {}

impl Hash for Handle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Handle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
