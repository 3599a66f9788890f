//! tzx - TZ database extractor
//!
//! Reads the IANA tz database zone files and decodes their Rule, Zone and
//! Link records into typed maps for code generators.
//!
//! - [`tzdb`] - line reader, classifier, decoders and the [`Extractor`]
//! - [`estimator`] - transition buffer sizing over an external simulator
//! - [`config`] - TOML configuration
//! - [`cli`] / [`theme`] - command-line front end

pub mod cli;
pub mod config;
pub mod estimator;
pub mod theme;
pub mod tzdb;

pub use config::Config;
pub use estimator::{BufferEstimate, BufferEstimator, BufferExceptions, TransitionSimulator};
pub use tzdb::{Extractor, TzDatabase};
