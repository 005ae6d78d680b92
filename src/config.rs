// Central configuration loaded from environment variables.
//
// The .env file is loaded automatically at startup via dotenvy, so local
// overrides live next to the slips instead of in shell profiles. Flags
// on the command line always win over the environment.

use std::env;

use anyhow::{Context, Result};

use crate::sheet::DEFAULT_COPIES;

pub struct Config {
    /// Default copies-per-sheet for `sheet`, overridden by `--copies`.
    pub copies: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default; an unset environment is fully valid.
    pub fn load() -> Result<Self> {
        let copies = match env::var("SLIPSORT_COPIES") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("SLIPSORT_COPIES is not a number: {value}"))?,
            Err(_) => DEFAULT_COPIES,
        };

        Ok(Self { copies })
    }
}
