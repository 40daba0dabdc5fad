//! Core library modules for the shelf client.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, session token, messaging
//! - **View Model**: Auth form, resource panels, the [`app::App`] that ties them together
//! - **Data Model**: Books, tasks and their filter forms
//! - **User Interface**: Table rendering and interactive forms
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf::libs::{app::App, config::Config, view::View};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut app = App::from_config(&Config::read()?)?;
//! app.start().await;
//! View::app(&app);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod auth;
pub mod book;
pub mod config;
pub mod data_storage;
pub mod filter;
pub mod forms;
pub mod messages;
pub mod panel;
pub mod session;
pub mod task;
pub mod view;
