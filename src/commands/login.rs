use crate::libs::{app::App, auth::AuthOutcome, config::Config, forms, messages::Message, view::View};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username; prompted when omitted
    #[arg(short, long)]
    username: Option<String>,

    /// Password; prompted when omitted
    #[arg(short, long)]
    password: Option<String>,
}

/// Logs in, stores the token and shows both panels.
///
/// A rejected login is shown on the auth form and leaves any stored token as it was.
pub async fn cmd(args: LoginArgs) -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    let credentials = forms::credentials(args.username, args.password)?;

    if app.submit_auth(&credentials).await == Some(AuthOutcome::LoggedIn) {
        msg_success!(Message::LoggedIn);
    }
    View::app(&app);

    Ok(())
}
