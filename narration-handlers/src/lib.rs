//! # Narration handlers
//!
//! [`Narrator`] turns a text message into a voice-ready WAV file: validate → synthesize → encode.
//! It holds no cross-request state; its synthesis capability is injected by the host.
//!
//! Chain handlers built on it:
//! - [`StartHandler`]: answers `/start` and `/help` with a greeting.
//! - [`NarrationHandler`]: narrates every other text message and delivers it as a voice message.
//! - [`LoggingHandler`]: logs inbound messages and the chain result.

mod logging_handler;
mod narration_handler;
mod narrator;
mod start_handler;

pub use logging_handler::LoggingHandler;
pub use narration_handler::{NarrationHandler, DEFAULT_CAPTION};
pub use narrator::{NarrationError, NarrationRequest, Narrator, DEFAULT_MAX_CHARS};
pub use start_handler::{StartHandler, DEFAULT_GREETING};
