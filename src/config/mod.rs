mod errors;

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

pub use errors::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "transaction_data.csv";

pub const USAGE: &str = "\
Usage: financial-assistant [--data PATH] [--log LEVEL] <command> [args]

Commands:
  add <description> <category> <amount> <date>   Record a transaction (date as YYYY-MM-DD)
  table                                           Print all transactions as CSV
  chart                                           Print spending per category as CSV
  reset                                           Delete all transactions

Options:
  --data PATH    Data file (default: transaction_data.csv)
  --log LEVEL    off, error, warn, info, debug, trace (default: error)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        description: String,
        category: String,
        amount: String,
        date: String
    },
    Table,
    Chart,
    Reset
}

/// Settings for one run of the shell, taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub log_level: LevelFilter,
    pub command: Command
}

impl Config {
    /// Parses arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut data_path = PathBuf::from(DEFAULT_DATA_PATH);
        let mut log_level = LevelFilter::ERROR;
        let mut positional = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--data" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    data_path = PathBuf::from(value);
                }
                "--log" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    log_level = parse_log_level(value);
                }
                _ => positional.push(arg.clone())
            }
        }

        let (name, rest) = positional.split_first().ok_or(ConfigError::MissingCommand)?;

        let command = match name.as_str() {
            "add" => match rest {
                [description, category, amount, date] => Command::Add {
                    description: description.clone(),
                    category: category.clone(),
                    amount: amount.clone(),
                    date: date.clone()
                },
                _ => return Err(wrong_arity(name, 4, rest.len()))
            },
            "table" | "chart" | "reset" if !rest.is_empty() => return Err(wrong_arity(name, 0, rest.len())),
            "table" => Command::Table,
            "chart" => Command::Chart,
            "reset" => Command::Reset,
            _ => return Err(ConfigError::UnknownCommand(name.clone()))
        };

        Ok(Self { data_path, log_level, command })
    }
}

fn wrong_arity(command: &str, expected: usize, actual: usize) -> ConfigError {
    ConfigError::WrongArity { command: command.to_string(), expected, actual }
}

/// Accepts any level name `tracing` knows (`off`, `error` .. `trace`), ignoring case.
pub fn parse_log_level(level: &str) -> LevelFilter {
    level.to_lowercase().parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level [{level}], using [error]");
        LevelFilter::ERROR
    })
}
