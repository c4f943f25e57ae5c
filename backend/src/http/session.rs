//! Per-request session built from upstream-authenticated headers.
//!
//! Authentication happens before requests reach this service; the proxy
//! forwards who the user is in `x-user-*` headers.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::str::FromStr;

use super::error::AppError;
use crate::api::{ClientId, TechnicianId, UserId};
use crate::models::{Role, SessionContext, SessionUser};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const TECHNICIAN_ID_HEADER: &str = "x-technician-id";
pub const CLIENT_ID_HEADER: &str = "x-client-id";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, AppError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.trim()).filter(|v| !v.is_empty()))
            .map_err(|_| AppError::Unauthorized(format!("Header '{}' is not valid text", name))),
    }
}

fn required<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    header(headers, name)?.ok_or_else(|| AppError::Unauthorized(format!("Missing '{}' header", name)))
}

fn parsed<T: FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value
        .parse::<T>()
        .map_err(|_| AppError::Unauthorized(format!("Malformed '{}' header", name)))
}

/// Build the acting user's session. Missing or malformed headers are a 401.
pub fn session_from_headers(headers: &HeaderMap) -> Result<SessionContext, AppError> {
    let id: UserId = parsed(USER_ID_HEADER, required(headers, USER_ID_HEADER)?)?;
    let name = required(headers, USER_NAME_HEADER)?.to_string();
    let role: Role = parsed(USER_ROLE_HEADER, required(headers, USER_ROLE_HEADER)?)?;

    let technician_id = header(headers, TECHNICIAN_ID_HEADER)?
        .map(|v| parsed::<TechnicianId>(TECHNICIAN_ID_HEADER, v))
        .transpose()?;
    let client_id = header(headers, CLIENT_ID_HEADER)?
        .map(|v| parsed::<ClientId>(CLIENT_ID_HEADER, v))
        .transpose()?;

    Ok(SessionContext::signed_in(SessionUser {
        id,
        name,
        role,
        technician_id,
        client_id,
    }))
}

/// Extractor wrapping the request's [`SessionContext`].
#[derive(Debug, Clone)]
pub struct Session(pub SessionContext);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers).map(Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_full_technician_session() {
        let session = session_from_headers(&headers(&[
            (USER_ID_HEADER, "11"),
            (USER_NAME_HEADER, "Ana Lopez"),
            (USER_ROLE_HEADER, "Technician"),
            (TECHNICIAN_ID_HEADER, "1"),
        ]))
        .unwrap();

        let user = session.user().unwrap();
        assert_eq!(user.role, Role::Technician);
        assert_eq!(user.technician_id, Some(TechnicianId::new(1)));
        assert_eq!(user.client_id, None);
    }

    #[test]
    fn test_missing_headers_are_unauthorized() {
        let err = session_from_headers(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_unknown_role_is_unauthorized() {
        let err = session_from_headers(&headers(&[
            (USER_ID_HEADER, "1"),
            (USER_NAME_HEADER, "Root"),
            (USER_ROLE_HEADER, "superuser"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(msg) if msg.contains(USER_ROLE_HEADER)));
    }

    #[test]
    fn test_malformed_client_id() {
        let err = session_from_headers(&headers(&[
            (USER_ID_HEADER, "1"),
            (USER_NAME_HEADER, "Harbor HOA"),
            (USER_ROLE_HEADER, "client"),
            (CLIENT_ID_HEADER, "abc"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
