// SPDX-License-Identifier: Apache-2.0

//! HTTP Basic authentication and role checks.
//!
//! The middleware only establishes who the caller is. Each handler states what
//! it requires by calling [`require_authenticated`] or [`require_role`] first.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cena_api::ApiError;
use cena_core::sha256_hex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::UserAccount;
use crate::http::HttpError;
use crate::AppState;

pub const REALM_CHALLENGE: &str = "Basic realm=\"cena\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    AuthenticatedUser,
    IngredientManager,
    /// Holds every other role.
    SuperAdministrator,
    Actuator,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthenticatedUser => "AUTHENTICATED_USER",
            Self::IngredientManager => "INGREDIENT_MANAGER",
            Self::SuperAdministrator => "SUPER_ADMINISTRATOR",
            Self::Actuator => "ACTUATOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    #[must_use]
    pub fn new(name: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            name: name.into(),
            roles: roles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role) || self.roles.contains(&Role::SuperAdministrator)
    }
}

/// Inserted into every request's extensions by [`authentication_middleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Authenticated(Principal),
}

impl Caller {
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(principal) => Some(principal),
        }
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.principal().is_some_and(|p| p.has_role(role))
    }
}

pub fn require_authenticated(caller: &Caller) -> Result<&Principal, ApiError> {
    caller.principal().ok_or_else(ApiError::authentication_required)
}

pub fn require_role(caller: &Caller, role: Role) -> Result<&Principal, ApiError> {
    let principal = require_authenticated(caller)?;
    if principal.has_role(role) {
        Ok(principal)
    } else {
        Err(ApiError::access_denied(format!("{role} role is required")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    UnsupportedScheme,
    MalformedCredentials,
    BadCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScheme => write!(f, "unsupported authorization scheme"),
            Self::MalformedCredentials => write!(f, "malformed basic credentials"),
            Self::BadCredentials => write!(f, "bad credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone)]
struct StoredAccount {
    password_sha256: String,
    roles: BTreeSet<Role>,
}

/// Known accounts, keyed by user name.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    accounts: HashMap<String, StoredAccount>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(accounts: &[UserAccount]) -> Self {
        let accounts = accounts
            .iter()
            .map(|a| {
                (
                    a.name.clone(),
                    StoredAccount {
                        password_sha256: a.password_sha256.to_ascii_lowercase(),
                        roles: a.roles.iter().copied().collect(),
                    },
                )
            })
            .collect();
        Self { accounts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// No `Authorization` header means an anonymous caller; a present but wrong one is an error.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthError> {
        let Some(raw) = authorization else {
            return Ok(Caller::Anonymous);
        };
        let (scheme, encoded) = raw
            .trim()
            .split_once(' ')
            .ok_or(AuthError::MalformedCredentials)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::UnsupportedScheme);
        }
        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::MalformedCredentials)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;
        let (name, password) = decoded
            .split_once(':')
            .ok_or(AuthError::MalformedCredentials)?;
        let account = self.accounts.get(name).ok_or(AuthError::BadCredentials)?;
        if !digests_match(&sha256_hex(password.as_bytes()), &account.password_sha256) {
            return Err(AuthError::BadCredentials);
        }
        Ok(Caller::Authenticated(Principal {
            name: name.to_string(),
            roles: account.roles.clone(),
        }))
    }
}

/// Compares every byte regardless of where the first difference sits.
fn digests_match(computed: &str, stored: &str) -> bool {
    let (a, b) = (computed.as_bytes(), stored.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub(crate) async fn authentication_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default().to_string());
    match state.credentials.authenticate(authorization.as_deref()) {
        Ok(caller) => {
            request.extensions_mut().insert(caller);
            next.run(request).await
        }
        Err(err) => {
            warn!(reason = %err, "authentication rejected");
            let mut response = HttpError(ApiError::authentication_required()).into_response();
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(REALM_CHALLENGE),
            );
            response
        }
    }
}
