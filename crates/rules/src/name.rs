//! Validated rule identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::RuleError;

/// Longest accepted rule name, in bytes.
pub const MAX_NAME_LEN: usize = 128;

/// Name of a rule, safe to join into a filesystem path.
///
/// Only ASCII alphanumerics, `-`, `_` and `.` are accepted; the name may not
/// start with `.` or contain `..`. A `RuleName` therefore never carries a
/// path separator or a relative-path segment, and `<dir>/<name>.yaml` always
/// resolves to a direct child of `<dir>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleName(String);

impl RuleName {
    /// Validate `name` against the allow-list.
    pub fn parse(name: impl Into<String>) -> Result<Self, RuleError> {
        let name = name.into();
        match check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(RuleError::InvalidName { name, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name backing this rule inside the rules directory.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, crate::RULE_EXTENSION)
    }
}

fn check(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name must not be empty");
    }
    if name.len() > MAX_NAME_LEN {
        return Err("name is longer than 128 bytes");
    }
    if name.starts_with('.') {
        return Err("name must not start with '.'");
    }
    if name.contains("..") {
        return Err("name must not contain '..'");
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(if bad == '/' || bad == '\\' {
            "name must not contain path separators"
        } else {
            "name may only contain ASCII letters, digits, '-', '_' and '.'"
        });
    }
    Ok(())
}

impl FromStr for RuleName {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RuleName {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RuleName> for String {
    fn from(name: RuleName) -> Self {
        name.0
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
