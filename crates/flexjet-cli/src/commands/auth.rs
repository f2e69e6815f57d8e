//! Authentication commands.

use crate::app::App;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use flexjet_services::AuthenticationService;
use std::io;

/// Sign in with username and password.
pub async fn login(app: &App, format: &OutputFormat) -> Result<()> {
    if app.is_signed_in().await? {
        output::print_success("Already signed in", format);
        return Ok(());
    }

    output::print_prompt("Username: ", format)?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let Some(username) = normalize_username(&username) else {
        bail!("Username is required");
    };

    // Read password without echo
    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        bail!("Password is required");
    }

    output::print_progress("Signing in...", format);

    if let Err(e) = app.auth.sign_in(&username, &password).await {
        bail!(e.user_facing_message());
    }

    output::print_success(&format!("Signed in as {}", username), format);
    Ok(())
}

/// Sign out and remove the stored token.
pub async fn logout(app: &App, format: &OutputFormat) -> Result<()> {
    if let Err(e) = app.auth.sign_out().await {
        bail!(e.user_facing_message());
    }

    output::print_success("Signed out successfully", format);
    Ok(())
}

/// Report whether a token is stored. Makes no network call.
pub async fn status(app: &App, api_base_url: &str, format: &OutputFormat) -> Result<()> {
    let signed_in = app.is_signed_in().await?;

    match format {
        OutputFormat::Text => {
            println!(
                "Auth:     {}",
                if signed_in { "signed in" } else { "not signed in" }
            );
            println!("API:      {}", api_base_url);
        }
        OutputFormat::Json => {
            output::print_json(&serde_json::json!({
                "logged_in": signed_in,
                "api_base_url": api_base_url,
            }))?;
        }
    }

    Ok(())
}

/// Trimmed username, or `None` if nothing is left.
fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
