use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to register command {name}: {reason}")]
    Register { name: String, reason: String },

    #[error("Failed to delete command(s): {}", .0.join(", "))]
    Unregister(Vec<String>),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Missing option: {0}")]
    MissingOption(String),

    #[error("Option {name} is not a {expected}")]
    OptionType { name: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, DbotError>;
