//! Host process execution.

pub mod command;
pub mod mock;
pub mod path;

pub use command::{describe, CommandOptions, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
pub use path::{is_executable, parse_system_path, resolve_tool_path};
