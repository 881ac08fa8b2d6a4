//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use textstereo::StereogramError;
    use textstereo::io::error::{WithContext, file_system_error, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/words.txt", "read word list", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read word list"));
        assert!(message.contains("/tmp/words.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("block_len", &"4", &"too short");

        let message = error.to_string();
        assert!(message.contains("block_len"));
        assert!(message.contains('4'));
        assert!(message.contains("too short"));
        assert!(error.source().is_none());
    }

    // Tests budget failures mention the row once context is attached
    // Verified by discarding the row in with_context
    #[test]
    fn test_unfillable_budget_row_context() {
        let result: Result<(), StereogramError> = Err(StereogramError::UnfillableBudget {
            budget: 6,
            length: 16,
            row: None,
        });

        let message = result.with_row(3).expect_err("still an error").to_string();
        assert!(message.contains("6 of 16"));
        assert!(message.contains("row 3"));
    }

    // Tests row context leaves other errors untouched
    // Verified by converting every error into a budget failure
    #[test]
    fn test_row_context_ignores_other_errors() {
        let result: Result<(), StereogramError> = Err(StereogramError::MessageWordTooLong {
            word: "enormous".to_string(),
            block_len: 8,
        });

        let error = result.with_row(1).expect_err("still an error");
        assert!(matches!(error, StereogramError::MessageWordTooLong { .. }));
        assert!(error.to_string().contains("'enormous' (8 chars)"));
    }

    // Tests error classification into configuration and input errors
    // Verified by swapping the classification sets
    #[test]
    fn test_error_classification() {
        let empty = StereogramError::EmptyCorpus {
            min_len: 3,
            max_len: 6,
        };
        let bad_word = StereogramError::InvalidMessageWord {
            word: "a\tb".to_string(),
            reason: "tab".to_string(),
        };

        assert!(empty.is_configuration_error() && !empty.is_input_error());
        assert!(bad_word.is_input_error() && !bad_word.is_configuration_error());
        assert!(empty.to_string().contains("3 to 6"));
    }

    // Tests plain IO errors convert into FileSystem errors
    // Verified by mapping IO errors to InvalidParameter
    #[test]
    fn test_from_io_error() {
        let error: StereogramError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();

        assert!(matches!(error, StereogramError::FileSystem { .. }));
        assert!(!error.is_configuration_error());
    }
}
