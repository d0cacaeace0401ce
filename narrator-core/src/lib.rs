//! # narrator-core
//!
//! Core types and traits for the narrator bot: [`Bot`] (outbound delivery), [`Handler`], message and
//! user types, and tracing initialization. Transport-agnostic; used by narrator-telegram, handler-chain
//! and narration-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{check_upload_size, Bot, MAX_VOICE_UPLOAD_BYTES};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
