use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Access rights recorded for a node. Never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRights {
    ReadOnly,
    WriteOnly,
    ReadWrite,
    /// Any token that is not one of the above, kept verbatim.
    Other(String),
}

impl AccessRights {
    pub fn from_token(token: &str) -> AccessRights {
        match token {
            "r" => AccessRights::ReadOnly,
            "w" => AccessRights::WriteOnly,
            "rw" | "wr" => AccessRights::ReadWrite,
            other => AccessRights::Other(other.to_string()),
        }
    }
}

impl FromStr for AccessRights {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(AccessRights::from_token(token))
    }
}

impl fmt::Display for AccessRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessRights::ReadOnly => f.write_str("r"),
            AccessRights::WriteOnly => f.write_str("w"),
            AccessRights::ReadWrite => f.write_str("rw"),
            AccessRights::Other(token) => f.write_str(token),
        }
    }
}

/// Rights keyed by bare entry name (not by full path), so every node called
/// `notes.txt` gets the same rights, whatever directory it is in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RightsTable {
    rights: HashMap<String, AccessRights>,
}

impl RightsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name rights` pairs, one per line.
    /// Lines that do not have exactly two fields are skipped.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        for (number, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [name, token] => table.insert(*name, AccessRights::from_token(token)),
                [] => {}
                _ => debug!(line = number + 1, content = line, "skipping malformed rights line"),
            }
        }
        table
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, rights: AccessRights) {
        self.rights.insert(name.into(), rights);
    }

    pub fn get(&self, name: &str) -> Option<&AccessRights> {
        self.rights.get(name)
    }

    pub fn len(&self) -> usize {
        self.rights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rights.is_empty()
    }
}
