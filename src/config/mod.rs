//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! host config file (TOML, [global] + [<job type>])
//!     → loader.rs (parse & merge sections into key/value params)
//!     → schema.rs (LoggerConfig::from_params)
//!     → validation.rs (engine config path present & readable, at init time)
//!     → engine initialization
//! ```
//!
//! # Design Decisions
//! - Hosts may also hand over a ready-made key/value map and skip the loader
//! - Validation runs when the engine is initialized, not when config is built,
//!   so a config can be inspected even when its path is wrong

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LoggerConfig;
