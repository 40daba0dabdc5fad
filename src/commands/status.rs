use crate::libs::{app::App, config::Config, messages::Message};
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let app = App::from_config(&Config::read()?)?;
    let api = app.api();

    msg_print!(Message::ConfigApiUrl(api.base_url().to_string()));
    if api.session().is_authenticated() {
        msg_print!(Message::SessionActive);
    } else {
        msg_warning!(Message::SessionMissing);
    }

    match api.health().await {
        Ok(health) => msg_success!(Message::ServerHealthy(health.message)),
        Err(e) => msg_error!(Message::ServerUnreachable(e.to_string())),
    }

    Ok(())
}
