use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No command given")]
    MissingCommand,
    #[error("Unknown command [{0}]")]
    UnknownCommand(String),
    #[error("Command [{command}] expects {expected} argument(s), got {actual}")]
    WrongArity {
        command: String,
        expected: usize,
        actual: usize
    },
    #[error("Option [{0}] requires a value")]
    MissingValue(String)
}
