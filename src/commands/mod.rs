//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod generate;
pub mod init;
pub mod presets;

pub use generate::{execute_generate, render_exercise, ConstraintOverrides, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use presets::execute_presets;
