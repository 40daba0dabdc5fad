//! # Shelf - books & tasks from the terminal
//!
//! A command-line client for the books & tasks API. It signs you in, keeps
//! the bearer token between runs, and lets you list, filter, create, complete
//! and delete books and tasks.
//!
//! ## Features
//!
//! - **Accounts**: Register, log in, log out
//! - **Books**: Filter by name, author and publisher; add and delete
//! - **Tasks**: Filter by title and status; add, complete and delete
//! - **Interactive Shell**: Menu-driven screens for all of the above
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
