use std::fmt;

use serde::{Deserialize, Serialize};

/// Health probe payload. The services never probe their dependencies, so the
/// only status ever reported is `SERVING`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn serving() -> Self {
        Self { status: "SERVING".into() }
    }
}

/// Version probe payload, formatted as `v<major>.<minor>.<patch>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Version {
    pub version: String,
}

impl Version {
    pub fn from_semver(semver: &str) -> Self {
        Self { version: format!("v{semver}") }
    }
}

/// Which of the two record services a process is running.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Invite,
    Role,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Invite => "usr_invite",
            ServiceKind::Role => "usr_role",
        }
    }

    /// Backing table of the service.
    pub fn table(self) -> &'static str {
        match self {
            ServiceKind::Invite => "user_codes",
            ServiceKind::Role => "user_roles",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_prefixed() {
        assert_eq!(Version::from_semver("1.0.0").version, "v1.0.0");
    }

    #[test]
    fn service_names_are_stable() {
        assert_eq!(ServiceKind::Invite.to_string(), "usr_invite");
        assert_eq!(ServiceKind::Role.table(), "user_roles");
    }
}
