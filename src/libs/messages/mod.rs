//! User-facing message catalogue and output macros.
//!
//! Every string shown to the user lives in [`Message`], so wording stays
//! consistent between the one-shot commands and the interactive shell.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
