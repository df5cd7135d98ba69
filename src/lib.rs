pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod git;
pub mod logging;
pub mod paths;
pub mod scaffold;
pub mod settings;
pub mod toolchain;

// Re-export commonly used types
pub use environment::Environment;
pub use error::ScaffoldError;
pub use scaffold::{Scaffold, ScaffoldPlan, ScaffoldReport};
pub use settings::Settings;
