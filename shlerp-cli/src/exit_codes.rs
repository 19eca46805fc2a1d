//! Process exit codes

pub const EXIT_SUCCESS: i32 = 0;

/// Any failure, including configuration errors and an unknown `--rule`
pub const EXIT_ERROR: i32 = 1;

/// Detection ended without a rule and none was given
pub const EXIT_NO_RULE: i32 = 2;
