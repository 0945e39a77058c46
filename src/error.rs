use thiserror::Error;

/// Application-wide error type.
///
/// Every variant aborts the run when it reaches the driver. Per-page HTTP
/// status failures are not errors: the fetcher logs them and returns the
/// records gathered so far.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Network ───────────────────────────────────────────────────────────────
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // ── Payload ───────────────────────────────────────────────────────────────
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // ── File / CSV ────────────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ── Generic fallback ──────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_source_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("read-only fs"));
    }

    #[test]
    fn display_messages_are_prefixed_by_category() {
        let cases = vec![
            (AppError::ConnectionFailed("dns".into()), "Connection failed: dns"),
            (AppError::InvalidUrl("nope".into()), "Invalid URL: nope"),
            (AppError::Decode("eof".into()), "Failed to decode response: eof"),
            (AppError::Internal("boom".into()), "Internal error: boom"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
