use crate::libs::{app::App, config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;

/// Removes the stored token. The server is not contacted.
pub fn cmd() -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    app.logout()?;

    msg_success!(Message::LoggedOut);
    Ok(())
}
