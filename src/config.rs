//! Process configuration.
//!
//! Every setting can come from a command-line flag or from the matching
//! environment variable; flags win.

use std::net::SocketAddr;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::model::{seed_countries, Country};

/// Command-line interface for the countries server.
#[derive(Debug, Clone, Parser)]
#[command(name = "countries-api")]
#[command(about = "Serve an in-memory collection of countries over HTTP", long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "COUNTRIES_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Requests that may queue for the collection actor before callers wait
    #[arg(long, env = "COUNTRIES_CHANNEL_CAPACITY", default_value = "32", value_parser = parse_capacity)]
    pub channel_capacity: usize,

    /// Start with an empty collection instead of the three seed countries
    ///
    /// The environment variable takes `true`/`false`, `1`/`0`, `yes`/`no` or `on`/`off`.
    #[arg(
        long,
        env = "COUNTRIES_EMPTY",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub empty: bool,
}

impl Config {
    /// The records the collection holds when the server starts.
    pub fn initial_collection(&self) -> Vec<Country> {
        if self.empty {
            Vec::new()
        } else {
            seed_countries()
        }
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("channel capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
