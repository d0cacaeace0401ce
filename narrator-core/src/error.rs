use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Payload too large: {size} bytes exceeds the {limit} byte upload limit")]
    PayloadTooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, BotError>;
