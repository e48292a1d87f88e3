use serde::{Deserialize, Serialize};

pub const PROJECT_MANAGER: &str = "PROJE_YONETICISI";
pub const STAFF: &str = "CALISAN";

/// The two roles the panel knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ProjectManager,
    Staff,
}

impl Role {
    pub fn authority(self) -> &'static str {
        match self {
            Role::ProjectManager => PROJECT_MANAGER,
            Role::Staff => STAFF,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub authority: String,
}

impl Authority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }
}

/// Ordered, possibly repeating list of granted authorities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Authority>);

impl RoleSet {
    pub fn new(authorities: Vec<Authority>) -> Self {
        Self(authorities)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Authority::new).collect())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.iter().any(|a| a.authority == role.authority())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Authority] {
        &self.0
    }

    /// The role whose dashboard this set lands on. Managers win over staff.
    pub fn landing_role(&self) -> Option<Role> {
        if self.contains(Role::ProjectManager) {
            Some(Role::ProjectManager)
        } else if self.contains(Role::Staff) {
            Some(Role::Staff)
        } else {
            None
        }
    }
}
