use linkflow::errors::{LinkflowError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = LinkflowError::validation("Key is required");

        assert!(matches!(error, LinkflowError::Validation(_)));
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Validation Error: Key is required");
    }

    #[test]
    fn test_clipboard_error() {
        let error = LinkflowError::clipboard("no display");

        assert!(matches!(error, LinkflowError::Clipboard(_)));
        assert!(!error.is_validation());
        assert!(error.to_string().contains("Clipboard Error"));
        assert!(error.to_string().contains("no display"));
    }

    #[test]
    fn test_format_simple_matches_display() {
        let error = LinkflowError::not_found("Seed file not found: groups.json");

        assert_eq!(
            error.format_simple(),
            "Resource Not Found: Seed file not found: groups.json"
        );
        assert_eq!(error.to_string(), error.format_simple());
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LinkflowError::validation("a"),
            LinkflowError::not_found("b"),
            LinkflowError::file_operation("c"),
            LinkflowError::serialization("d"),
            LinkflowError::config("e"),
            LinkflowError::terminal("f"),
            LinkflowError::clipboard("g"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing seed");
        let error: LinkflowError = io_error.into();

        assert!(matches!(error, LinkflowError::FileOperation(_)));
        assert!(error.message().contains("missing seed"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error: LinkflowError = json_error.into();

        assert_eq!(error.code(), "E004");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read(path: &str) -> Result<String> {
            Ok(std::fs::read_to_string(path)?)
        }

        let error = read("/definitely/not/here.json").unwrap_err();
        assert_eq!(error.error_type(), "File Operation Error");
    }

    #[test]
    fn test_error_trait_object() {
        let error: Box<dyn Error + Send + Sync> = Box::new(LinkflowError::not_found("group 9"));
        assert!(error.to_string().contains("group 9"));
        assert!(error.source().is_none());
    }
}
