use linkflow::config::{AppConfig, get_config, set_config};

#[cfg(test)]
mod config_file_tests {
    use super::*;

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkflow.toml");
        std::fs::write(
            &path,
            "[ui]\nshort_domain = \"sho.rt\"\nclipboard = false\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::try_load(path.to_str()).unwrap();
        assert_eq!(config.ui.short_domain, "sho.rt");
        assert!(!config.ui.clipboard);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ui.url_truncate_length, 40);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = AppConfig::try_load(path.to_str()).unwrap_err();
        assert_eq!(err.code(), "E005");

        // the lenient loader falls back to defaults
        let config = AppConfig::load(path.to_str());
        assert_eq!(config.ui.short_domain, "your-domain.com");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.data.seed_file = Some("groups.json".to_string());
        config.save_to_file(&path).unwrap();

        let reloaded = AppConfig::try_load(path.to_str()).unwrap();
        assert_eq!(reloaded.data.seed_file.as_deref(), Some("groups.json"));
    }
}

#[cfg(test)]
mod global_config_tests {
    use super::*;

    #[test]
    fn test_set_config_replaces_global() {
        let mut config = AppConfig::default();
        config.ui.short_domain = "lf.test".to_string();
        set_config(config);
        assert_eq!(get_config().ui.short_domain, "lf.test");
    }
}
