//! Command-line configuration of the driver.

use crate::error::{Error, Result};
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = "users.json";

pub const USAGE: &str = "usage: balanced-trees [PATH] [--seed N] [--verbose | -v] [--quiet | -q]";

/// Settings for a single run of the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The JSON array of users to load.
    pub path: PathBuf,
    /// Seed of the shuffle. A fresh seed is drawn when this is `None`.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: PathBuf::from(DEFAULT_PATH),
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Builds a configuration from command-line arguments, excluding the program name.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::config::Config;
    ///
    /// let args = vec!["data/users.json", "--seed", "7"];
    /// let config = Config::from_args(args.into_iter().map(String::from)).unwrap();
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.path.to_str(), Some("data/users.json"));
    /// ```
    pub fn from_args<I>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" | "-s" => {
                    let value = args
                        .next()
                        .ok_or_else(|| usage(format!("missing value for {}", arg)))?;
                    let seed = value
                        .parse()
                        .map_err(|_| usage(format!("invalid seed `{}`", value)))?;
                    config.seed = Some(seed);
                },
                "--verbose" | "-v" => config.log_level = LevelFilter::Debug,
                "--quiet" | "-q" => config.log_level = LevelFilter::Warn,
                flag if flag.starts_with('-') => {
                    return Err(usage(format!("unknown flag `{}`", flag)));
                },
                _ => {
                    if path.is_some() {
                        return Err(usage(format!("unexpected argument `{}`", arg)));
                    }
                    path = Some(PathBuf::from(&arg));
                },
            }
        }

        if let Some(path) = path {
            config.path = path;
        }
        Ok(config)
    }
}

fn usage(message: String) -> Error {
    Error::Usage(format!("{}\n{}", message, USAGE))
}
