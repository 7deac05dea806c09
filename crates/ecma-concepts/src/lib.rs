//! ecma-concepts: prints the results of two addition forms, a multiplication
//! and a three-way destructuring of a sequence with a hole.

pub mod config;

pub use config::{Config, ConfigError};
pub use ecma_concepts_core::{Style, Transcript};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build the transcript for `config` and write it to `out`.
pub fn run<W: std::io::Write>(config: &Config, out: W) -> Result<()> {
    Transcript::build(&config.style()).write_to(out)?;
    Ok(())
}
