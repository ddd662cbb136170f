// Copyright 2026 Samvidha Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

//! Credential brokering.
//!
//! The broker trades portal credentials for opaque bearer tokens and keeps
//! the authenticated upstream sessions behind them. A token in a caller's
//! hands means the portal login already succeeded; resolving it returns the
//! live session ready for page fetches.

pub mod store;
pub mod token;

pub use store::{MemoryStore, SessionStore};

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::error::GatewayError;
use crate::portal::{PortalClient, PortalSession};

/// One authenticated portal session held on behalf of a caller.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub session: PortalSession,
}

/// Trades credentials for tokens and resolves tokens back to sessions.
pub struct Broker {
    client: PortalClient,
    store: Arc<dyn SessionStore>,
}

impl Broker {
    pub fn new(client: PortalClient, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Relay credentials to the portal and mint a token on success.
    ///
    /// Empty credentials are rejected before any upstream traffic. Tokens
    /// never expire; logging in again issues a fresh token and leaves earlier
    /// ones valid.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, GatewayError> {
        if username.is_empty() || password.is_empty() {
            return Err(GatewayError::MissingCredentials);
        }

        let session = self.client.login(username, password).await?;
        let token = token::mint();
        let entry = SessionEntry {
            username: username.to_string(),
            issued_at: Utc::now(),
            session,
        };
        self.store.put(token.clone(), entry).await;

        let sessions = self.store.count().await;
        info!(
            user = %username,
            sessions,
            "portal login accepted"
        );
        Ok(token)
    }

    /// Resolve a bearer token back to its live session.
    pub async fn resolve(&self, bearer: &str) -> Result<SessionEntry, GatewayError> {
        self.store
            .get(bearer)
            .await
            .ok_or(GatewayError::Unauthorized)
    }

    /// Number of sessions currently held.
    pub async fn session_count(&self) -> usize {
        self.store.count().await
    }
}
