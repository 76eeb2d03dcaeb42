// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session issuance and extraction for the server.
//!
//! Login is the simulated role-pick of the surrounding product: the caller
//! names an organizational role and receives a bearer token for the first
//! roster member holding it. The engine itself never authenticates; the
//! extractor resolves a token back to an actor and hands the engine an
//! `Option<AuthenticatedActor>` so an absent or unknown token surfaces as
//! the engine's own Unauthorized result.

use axum::{extract::FromRequestParts, http::request::Parts};
use clinic_rota_api::AuthenticatedActor;
use std::collections::HashMap;
use tracing::debug;

use crate::AppState;

/// In-memory session store: bearer token to resolved actor.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, AuthenticatedActor>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Issues a new session token for an actor.
    pub fn issue(&mut self, actor: AuthenticatedActor) -> String {
        let token: String = generate_session_token();
        self.sessions.insert(token.clone(), actor);
        token
    }

    /// Resolves a token to its actor, if the session exists.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<AuthenticatedActor> {
        self.sessions.get(token).cloned()
    }

    /// Deletes a session. Missing tokens are ignored.
    pub fn revoke(&mut self, token: &str) {
        self.sessions.remove(token);
    }
}

/// Generates a session token.
///
/// In a production system, this would use a cryptographically secure
/// random number generator. For simplicity, we use a timestamp-based
/// approach here.
fn generate_session_token() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("session_{timestamp}_{}", rand::random::<u64>())
}

/// Extractor resolving the `Authorization: Bearer <token>` header to the
/// session's actor.
///
/// Never rejects: a missing header, malformed header, or unknown token all
/// resolve to `None`, and the engine's request guard turns that into the
/// typed Unauthorized failure inside the uniform envelope.
pub struct SessionActor(pub Option<AuthenticatedActor>);

impl FromRequestParts<AppState> for SessionActor {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: Option<String> = parts
            .headers
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        let Some(token) = token else {
            debug!("No bearer token on request");
            return Ok(Self(None));
        };

        let engine = state.engine.lock().await;
        let actor: Option<AuthenticatedActor> = engine.sessions.resolve(&token);
        drop(engine);

        if actor.is_none() {
            debug!("Bearer token did not resolve to a session");
        }

        Ok(Self(actor))
    }
}
