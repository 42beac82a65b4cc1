//! Exit codes for the CLI

use relnotes_core::RelnotesError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Settings file error
pub const CONFIG_ERROR: u8 = 2;

/// Configuration resource could not be fetched or parsed
pub const SOURCE_ERROR: u8 = 3;

/// Notes file could not be read or rendered
pub const NOTES_ERROR: u8 = 4;

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RelnotesError>() {
        Some(RelnotesError::Config(_)) => CONFIG_ERROR,
        Some(RelnotesError::Source(_)) => SOURCE_ERROR,
        Some(RelnotesError::Notes(_)) => NOTES_ERROR,
        _ => ERROR,
    }
}
