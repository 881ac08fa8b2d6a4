//! Tests for layout constants and configuration validation

#[cfg(test)]
mod tests {
    use textstereo::StereogramError;
    use textstereo::io::configuration::{
        CALIBRATION_MARKER, CAMOUFLAGE_CHARS, DEFAULT_BLOCK_LEN, DEFAULT_MESSAGE_START,
        DEFAULT_TEXT_WIDTH, DEFAULT_TRAILING_ROWS, MAX_WORD_LEN, MESSAGE_PROMPT, MIN_WORD_LEN,
        StereogramConfig,
    };

    fn rejected_parameter(config: &StereogramConfig) -> Option<&'static str> {
        match config.validate() {
            Err(StereogramError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests the default layout values
    // Verified by changing constant values
    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_BLOCK_LEN, 16);
        assert_eq!(DEFAULT_TEXT_WIDTH, 80);
        assert_eq!(DEFAULT_MESSAGE_START, 6);
        assert_eq!(DEFAULT_TRAILING_ROWS, 2);
        assert_eq!((MIN_WORD_LEN, MAX_WORD_LEN), (3, 6));
        assert_eq!(CALIBRATION_MARKER, '*');
        assert_eq!(CAMOUFLAGE_CHARS, ['s', 't', 'a']);
        assert!(MESSAGE_PROMPT.ends_with(' '));
    }

    // Tests the default padding adds eight rows around the message
    // Verified by dropping the trailing rows from the count
    #[test]
    fn test_row_count_padding() {
        let config = StereogramConfig::default();

        assert_eq!(config.row_count(0), 8);
        assert_eq!(config.row_count(3), 11);
        assert_eq!(config.min_word_len(), 3);
        assert_eq!(config.max_word_len(), 6);
    }

    // Tests the default configuration validates
    // Verified by tightening the width requirement
    #[test]
    fn test_default_is_valid() {
        assert!(StereogramConfig::default().validate().is_ok());
    }

    // Tests each invalid field is named in the error
    // Verified by reordering validation checks
    #[test]
    fn test_invalid_fields() {
        let base = StereogramConfig::default();

        let zero_min = StereogramConfig {
            word_len: (0, 6),
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&zero_min), Some("min_word_len"));

        let inverted = StereogramConfig {
            word_len: (5, 4),
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&inverted), Some("max_word_len"));

        let tiny_block = StereogramConfig {
            block_len: 6,
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&tiny_block), Some("block_len"));

        let long_words = StereogramConfig {
            word_len: (3, 20),
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&long_words), Some("max_word_len"));

        let narrow = StereogramConfig {
            text_width: 17,
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&narrow), Some("text_width"));

        let no_chars = StereogramConfig {
            camouflage_chars: Vec::new(),
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&no_chars), Some("camouflage_chars"));

        let spaced = StereogramConfig {
            camouflage_chars: vec!['s', ' '],
            ..base.clone()
        };
        assert_eq!(rejected_parameter(&spaced), Some("camouflage_chars"));

        let blank_marker = StereogramConfig {
            marker: ' ',
            ..base
        };
        assert_eq!(rejected_parameter(&blank_marker), Some("marker"));
    }
}
