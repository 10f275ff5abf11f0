//! Configuration loading for the payroll desk.
//!
//! The desk reads a single YAML file naming the payroll log location and the
//! employee roster.
//!
//! # Example
//!
//! ```no_run
//! use payroll_desk::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Loaded {} employees", config.directory().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DeskConfig;
