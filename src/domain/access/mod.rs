// src/domain/access/mod.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Role::Admin => HashSet::from([
                Cap::new("news", "create"),
                Cap::new("news", "update"),
                Cap::new("news", "delete"),
                Cap::new("news", "view:hidden"),
                Cap::new("services", "create"),
                Cap::new("services", "update"),
                Cap::new("services", "delete"),
                Cap::new("services", "view:hidden"),
                Cap::new("categories", "create"),
                Cap::new("categories", "update"),
                Cap::new("categories", "delete"),
            ]),
            Role::Editor => HashSet::from([
                Cap::new("news", "create"),
                Cap::new("news", "update"),
                Cap::new("news", "view:hidden"),
                Cap::new("services", "view:hidden"),
            ]),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            other => Err(DomainError::Validation(format!("unknown role: {other}"))),
        }
    }
}
