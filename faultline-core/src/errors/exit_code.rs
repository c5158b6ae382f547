//! FaultlineExitCode trait for the CLI boundary.

/// Successful run.
pub const EXIT_OK: i32 = 0;
/// Operational failure (I/O, internal).
pub const EXIT_FAILURE: i32 = 1;
/// Caller input error: bad manifest content, bad config, unknown service.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Trait mapping Faultline errors to process exit codes.
/// Every error enum implements this so the binary can exit with a
/// structured status instead of a blanket failure.
pub trait FaultlineExitCode {
    /// Returns the process exit code for this error.
    fn exit_code(&self) -> i32;
}
