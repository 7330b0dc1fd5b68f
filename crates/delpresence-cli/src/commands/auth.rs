use anyhow::Context as _;
use chrono::{Local, Utc};
use clap::Subcommand;
use delpresence_auth::{TokenStore, decode_unverified};
use dialoguer::Password;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store an access token for later commands
    Login {
        /// Access token (prompted for when omitted)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Remove the stored access token
    Logout,
    /// Show who the stored token belongs to and when it expires
    Status,
}

pub fn run(store: &TokenStore, command: AuthCommand) -> anyhow::Result<()> {
    match command {
        AuthCommand::Login { token } => {
            let token = match token {
                Some(token) => token,
                None => Password::new().with_prompt("Access token").interact()?,
            };
            store
                .store(&token)
                .context("Token tidak valid atau tidak dapat disimpan")?;
            let claims = decode_unverified(&token)?;
            println!("✅ Berhasil masuk sebagai {}", claims.display_name());
            println!("   Token disimpan di {}", store.path().display());
        }
        AuthCommand::Logout => {
            store.delete()?;
            println!("✅ Berhasil keluar");
        }
        AuthCommand::Status => {
            let token = store.require()?;
            let claims = decode_unverified(&token)?;
            let expires = claims
                .expires_at()
                .map(|at| at.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());

            println!("Pengguna : {}", claims.display_name());
            println!("Peran    : {}", claims.role.as_deref().unwrap_or("-"));
            println!("Berlaku  : {expires}");
            if claims.is_expired_at(Utc::now()) {
                anyhow::bail!(delpresence_core::messages::SESSION_EXPIRED);
            }
            if !claims.is_admin() {
                println!("⚠️  Token ini bukan milik admin; sebagian perintah akan ditolak server");
            }
        }
    }
    Ok(())
}
