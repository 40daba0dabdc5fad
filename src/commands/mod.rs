pub mod books;
pub mod init;
pub mod login;
pub mod logout;
pub mod register;
pub mod shell;
pub mod status;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the API URL")]
    Init(init::InitArgs),
    #[command(about = "Log in and store the session token")]
    Login(login::LoginArgs),
    #[command(about = "Create a new account")]
    Register(register::RegisterArgs),
    #[command(about = "Forget the stored session token")]
    Logout,
    #[command(about = "List, filter, add and delete books")]
    Books(books::BooksArgs),
    #[command(about = "List, filter, add, complete and delete tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Interactive mode")]
    Shell,
    #[command(about = "Show the API URL, session and server health")]
    Status,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Register(args) => register::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Books(args) => books::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Shell => shell::cmd().await,
            Commands::Status => status::cmd().await,
        }
    }
}
