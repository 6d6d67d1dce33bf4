//! Command-line interface: argument parsing and the version command.
//!
//! Called early in `main()` before the TUI starts:
//!
//! ```ignore
//! match discuss::cli::parse_args(std::env::args()) {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Invalid(msg) => { eprintln!("{}", msg); std::process::exit(2) }
//!     CliCommand::Run(options) => { /* build config and run */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{handle_version_command, VERSION};

/// Usage line printed for invalid arguments.
pub const USAGE: &str = "usage: discuss [--url URL] [--sort KEY] [--token TOKEN] [--version]";
