//! Macros for common CLI error handling patterns.

/// Write a line to a stream and return the error exit code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or count it as corrupted and continue to the next one.
///
/// # Examples
///
/// ```ignore
/// let record: MatchRecord = parse_json_or_continue!(line, corrupted);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $corrupted:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable record");
                $corrupted += 1;
                continue;
            }
        }
    };
}
