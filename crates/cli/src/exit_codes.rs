//! CLI Exit Code Registry
//!
//! Single source of truth for process exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Description                                            |
//! |------|--------------------------------------------------------|
//! | 0    | Success, including cancelled dialogs and empty input   |
//! | 1    | General error (unspecified)                            |
//! | 2    | Usage error (bad arguments)                            |
//! | 3    | I/O error (unreadable input, unwritable output)        |
//! | 4    | Parse error (malformed delimited input)                |
//!
//! Cancelled file dialogs and empty input files exit 0 on purpose: the
//! user asked for nothing to happen and nothing happened.

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// I/O error - input unreadable or output unwritable.
pub const EXIT_IO_ERROR: u8 = 3;

/// Parse error - input could not be parsed as delimited text.
pub const EXIT_PARSE_ERROR: u8 = 4;
