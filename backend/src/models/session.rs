//! Acting-user context and roles.
//!
//! A [`SessionContext`] is an explicit value handed to whatever needs to know
//! who is asking. It is created once per request (see `http::session`) and
//! dropped with it; nothing about the session lives in process-wide state.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::people::same_technician;
use crate::api::{ClientId, TechnicianId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Technician,
    Client,
    OfficeStaff,
}

impl Role {
    /// Admins and office staff coordinate the whole schedule.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::OfficeStaff)
    }
}

/// The authenticated user a request acts on behalf of.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    /// Set when `role` is `technician`.
    #[serde(default)]
    pub technician_id: Option<TechnicianId>,
    /// Set when `role` is `client`.
    #[serde(default)]
    pub client_id: Option<ClientId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    user: Option<SessionUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the acting user (init-on-load).
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// Drop the acting user (reset-on-logout).
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Whether the user may read the whole schedule hub (list, calendar, board).
    pub fn can_view_schedule(&self) -> bool {
        matches!(self.role(), Some(role) if role != Role::Client)
    }

    /// Whether the user may read the route of `technician_name`.
    ///
    /// Staff can read every route; technicians only their own.
    pub fn can_view_route(&self, technician_name: &str) -> bool {
        match self.user.as_ref() {
            Some(user) if user.role.is_staff() => true,
            Some(user) if user.role == Role::Technician => {
                same_technician(Some(&user.name), technician_name)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn user(role: Role, name: &str) -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            name: name.to_string(),
            role,
            technician_id: None,
            client_id: None,
        }
    }

    #[test]
    fn test_role_parses_case_insensitive() {
        assert_eq!(Role::from_str("office_staff").unwrap(), Role::OfficeStaff);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("owner").is_err());
    }

    #[test]
    fn test_sign_in_and_out_lifecycle() {
        let mut ctx = SessionContext::anonymous();
        assert!(!ctx.is_authenticated());
        ctx.sign_in(user(Role::Admin, "Root"));
        assert_eq!(ctx.role(), Some(Role::Admin));
        ctx.sign_out();
        assert!(ctx.role().is_none());
    }

    #[test]
    fn test_schedule_access_by_role() {
        assert!(SessionContext::signed_in(user(Role::OfficeStaff, "Oz")).can_view_schedule());
        assert!(SessionContext::signed_in(user(Role::Technician, "Ana")).can_view_schedule());
        assert!(!SessionContext::signed_in(user(Role::Client, "Cy")).can_view_schedule());
        assert!(!SessionContext::anonymous().can_view_schedule());
    }

    #[test]
    fn test_route_access_for_technician_is_own_only() {
        let ctx = SessionContext::signed_in(user(Role::Technician, "Ana Lopez"));
        assert!(ctx.can_view_route("ana lopez"));
        assert!(!ctx.can_view_route("Ben Ortiz"));

        let staff = SessionContext::signed_in(user(Role::Admin, "Root"));
        assert!(staff.can_view_route("Ben Ortiz"));
    }
}
