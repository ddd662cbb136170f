// Copyright 2026 Samvidha Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

//! Samvidha gateway library: relays portal logins and scrapes the student
//! pages behind them into a JSON REST API.
//!
//! The portal itself offers no API. It authenticates with a PHP form post
//! and renders everything as server-side HTML, so this crate holds the
//! authenticated sessions, issues opaque bearer tokens for them, and turns
//! the attendance, mid-term marks, and profile pages into structured rows.

pub mod broker;
pub mod cli;
pub mod config;
pub mod error;
pub mod portal;
pub mod rest;
pub mod scrape;
