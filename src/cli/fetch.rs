//! One-shot page fetch for scripting and debugging.
//!
//! Logs in, scrapes a single page, and prints the extraction as pretty JSON
//! without going through the REST server or the token store.

use anyhow::{bail, Context, Result};
use serde_json::json;

use crate::config::Config;
use crate::portal::PortalClient;
use crate::scrape::{attendance, midmarks, profile};

pub async fn run(page: &str, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => std::env::var("SAMVIDHA_GATEWAY_PASSWORD")
            .context("no --password given and SAMVIDHA_GATEWAY_PASSWORD is unset")?,
    };

    let config = Config::from_env()?;
    let client = PortalClient::new(config.portal_url.clone(), config.upstream_timeout);
    let session = client
        .login(username, &password)
        .await
        .context("portal login failed")?;

    let value = match page {
        "attendance" => json!(attendance::scrape(&session).await?.into_rows()),
        "midmarks" => {
            let marks = midmarks::scrape(&session).await?;
            json!({
                "theory": marks.theory.into_rows(),
                "laboratory": marks.laboratory.into_rows(),
            })
        }
        "profile" => json!(profile::scrape(&session).await?),
        other => bail!("unknown page '{other}' (expected attendance, midmarks, or profile)"),
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
