//! Bearer token minting and header parsing.

use axum::http::{header, HeaderMap};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::GatewayError;

/// Raw entropy per token before encoding.
const TOKEN_BYTES: usize = 24;

/// Mint an opaque bearer token: 24 bytes from the OS CSPRNG, url-safe base64
/// without padding (32 characters).
pub fn mint() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Pull the bearer token out of request headers.
///
/// Only the `Bearer <token>` shape is accepted. A different scheme, a bare
/// token, or an empty remainder is rejected here instead of being passed on
/// to a store lookup.
pub fn from_headers(headers: &HeaderMap) -> Result<&str, GatewayError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(GatewayError::Unauthorized)?
        .to_str()
        .map_err(|_| GatewayError::Unauthorized)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(GatewayError::Unauthorized)?
        .trim();
    if token.is_empty() {
        return Err(GatewayError::Unauthorized);
    }
    Ok(token)
}
