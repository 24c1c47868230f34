// ABOUTME: Library for reading environment variables defined in a shell script
// ABOUTME: Sources the script in a child bash session and observes the resulting state

pub mod error;
pub mod script_vars;
pub mod shell;

// Re-export main types for easy access
pub use error::{Result, ShellVarsError};
pub use script_vars::{
    DEFAULT_IGNORE, get_var, get_vars, get_vars_with_ignore, list_vars, list_vars_with_ignore,
};
pub use shell::shell_escape;

#[cfg(test)]
pub use script_vars_focused_test::*;
