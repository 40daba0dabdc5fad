use crate::libs::{app::App, auth::AuthMode, config::Config, forms, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username; prompted when omitted
    #[arg(short, long)]
    username: Option<String>,

    /// Password; prompted when omitted
    #[arg(short, long)]
    password: Option<String>,
}

/// Creates an account. Does not log in.
pub async fn cmd(args: RegisterArgs) -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    app.set_auth_mode(AuthMode::Register);
    let credentials = forms::credentials(args.username, args.password)?;

    app.submit_auth(&credentials).await;
    View::auth(app.auth());

    Ok(())
}
