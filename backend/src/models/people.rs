//! Technicians (with their login user) and clients.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::{ClientId, TechnicianId, UserId};

/// User account attached to a technician record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechnicianUser {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Technician joined with its user, as served by `/api/technicians-with-users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianWithUser {
    pub id: TechnicianId,
    #[serde(default = "default_true")]
    pub active: bool,
    pub user: TechnicianUser,
}

fn default_true() -> bool {
    true
}

impl TechnicianWithUser {
    pub fn name(&self) -> &str {
        &self.user.name
    }
}

/// Whether `candidate` names `technician`, ignoring ASCII case and surrounding
/// whitespace. Route access checks and route building both use this rule.
pub fn same_technician(candidate: Option<&str>, technician: &str) -> bool {
    candidate.is_some_and(|name| name.trim().eq_ignore_ascii_case(technician.trim()))
}

/// Technician id → display name.
#[derive(Debug, Clone, Default)]
pub struct TechnicianDirectory {
    names: HashMap<TechnicianId, String>,
}

impl TechnicianDirectory {
    pub fn from_technicians(technicians: &[TechnicianWithUser]) -> Self {
        Self {
            names: technicians
                .iter()
                .map(|t| (t.id, t.user.name.clone()))
                .collect(),
        }
    }

    pub fn name_of(&self, id: TechnicianId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(id: i64, name: &str) -> TechnicianWithUser {
        TechnicianWithUser {
            id: TechnicianId::new(id),
            active: true,
            user: TechnicianUser {
                id: UserId::new(100 + id),
                name: name.to_string(),
                email: None,
            },
        }
    }

    #[test]
    fn test_directory_resolves_names() {
        let directory = TechnicianDirectory::from_technicians(&[tech(1, "Ana"), tech(2, "Ben")]);
        assert_eq!(directory.name_of(TechnicianId::new(2)), Some("Ben"));
        assert_eq!(directory.name_of(TechnicianId::new(9)), None);
    }

    #[test]
    fn test_same_technician_ignores_case_and_padding() {
        assert!(same_technician(Some("Ana Lopez"), " ana lopez "));
        assert!(!same_technician(Some("Ana Lopez"), "Ana"));
        assert!(!same_technician(None, "Ana Lopez"));
    }

    #[test]
    fn test_technician_active_defaults_true() {
        let t: TechnicianWithUser =
            serde_json::from_str(r#"{"id": 1, "user": {"id": 5, "name": "Ana"}}"#).unwrap();
        assert!(t.active);
        assert_eq!(t.name(), "Ana");
    }
}
