use linkflow::store::seed::{default_seed, export_seed, load_seed, parse_seed};
use linkflow::store::{GroupId, LinkStatus};

#[cfg(test)]
mod seed_file_tests {
    use super::*;

    #[test]
    fn test_export_then_load_preserves_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("groups.json");

        export_seed(&default_seed(), &path).unwrap();
        assert!(path.exists());

        let loaded = load_seed(&path).unwrap();
        assert_eq!(loaded, default_seed());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert_eq!(err.error_type(), "Resource Not Found");
        assert!(err.message().contains("absent.json"));
    }

    #[test]
    fn test_load_unreadable_path_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(dir.path()).unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_load_invalid_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"id\": 1, \"name\": ").unwrap();

        let err = load_seed(&path).unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}

#[cfg(test)]
mod seed_contract_tests {
    use super::*;

    #[test]
    fn test_minimal_document_uses_defaults() {
        let groups = parse_seed(
            r#"[
                {
                    "id": 10,
                    "name": "Newsletter",
                    "links": [
                        { "id": "n1", "key": "/news", "originalUrl": "https://news.dev" }
                    ]
                }
            ]"#,
        )
        .unwrap();

        let group = &groups[0];
        assert_eq!(group.id, GroupId(10));
        assert!(group.is_expanded);
        assert_eq!(group.links[0].clicks, 0);
        assert_eq!(group.links[0].status, LinkStatus::Active);
    }

    #[test]
    fn test_collapsed_and_archived_are_read() {
        let groups = parse_seed(
            r#"[
                {
                    "id": 3,
                    "name": "Old",
                    "isExpanded": false,
                    "links": [
                        {
                            "id": "o1",
                            "key": "/old",
                            "originalUrl": "https://old.dev",
                            "clicks": 12,
                            "status": "archived"
                        }
                    ]
                }
            ]"#,
        )
        .unwrap();

        assert!(!groups[0].is_expanded);
        assert_eq!(groups[0].links[0].status, LinkStatus::Archived);
        assert_eq!(groups[0].links[0].clicks, 12);
    }

    #[test]
    fn test_blank_group_name_is_validation_error() {
        let err = parse_seed(r#"[{ "id": 1, "name": "  ", "links": [] }]"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_document_is_allowed() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }
}
