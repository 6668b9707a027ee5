pub mod tools {
    use std::path::PathBuf;

    pub fn project_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn test_config() -> PathBuf {
        project_dir().join("tests").join("using-test-config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_config_exists() {
        assert!(tools::test_config().is_file(), "{}", tools::test_config().to_string_lossy());
    }
}
