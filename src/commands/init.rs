//! Configuration initialization command.
//!
//! Without flags an interactive wizard asks for the API URL, seeded with the
//! current value. `--api-url` skips the prompt, `--delete` removes the file.

use crate::{
    libs::{
        config::Config,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// API URL to store without prompting
    #[arg(long)]
    api_url: Option<String>,

    /// Remove existing configuration instead of creating new one
    #[arg(short, long, conflicts_with = "api_url")]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = match init_args.api_url {
        Some(api_url) => Config::with_api_url(&api_url)?,
        None => Config::read()?.init()?,
    };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
