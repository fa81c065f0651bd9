use anyhow::Context;

use minierp_app::{AppConfig, Erp};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    minierp_observability::init_with(config.log_format);

    let email = std::env::var("MINIERP_EMAIL").unwrap_or_else(|_| {
        tracing::warn!("MINIERP_EMAIL not set; using demo admin account");
        "admin@erp.com".to_string()
    });
    let password = std::env::var("MINIERP_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let mut erp = Erp::new(config);
    let user = erp
        .login(&email, &password)
        .with_context(|| format!("login failed for {email}"))?;
    tracing::info!(name = %user.name, role = %user.role, "signed in");

    let overview = erp.overview()?;
    println!("{}", serde_json::to_string_pretty(&overview.stats)?);
    println!("{}", serde_json::to_string_pretty(&overview.low_stock)?);

    Ok(())
}
