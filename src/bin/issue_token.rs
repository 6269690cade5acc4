// src/bin/issue_token.rs
//! Mint an access token for operators: `issue_token <subject> <role> [resource:action ...]`.
use anyhow::{Context, Result, bail};
use municipal_portal::application::{dto::TokenSubject, ports::security::TokenIssuer};
use municipal_portal::config::AppConfig;
use municipal_portal::domain::access::{Capability, Role};
use municipal_portal::infrastructure::security::token::BiscuitTokenVerifier;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(subject), Some(role)) = (args.next(), args.next()) else {
        bail!("usage: issue_token <subject> <admin|editor> [resource:action ...]");
    };
    let role: Role = role.parse().context("invalid role")?;

    let mut token_subject = TokenSubject::new(subject, role);
    for grant in args {
        let (resource, action) = grant
            .split_once(':')
            .with_context(|| format!("capability must look like resource:action, got {grant}"))?;
        token_subject
            .extra_capabilities
            .insert(Capability::new(resource, action));
    }

    let config = AppConfig::from_env()?;
    let issuer = BiscuitTokenVerifier::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = issuer.issue(token_subject).await?;

    println!("{}", serde_json::to_string_pretty(&token)?);
    Ok(())
}
