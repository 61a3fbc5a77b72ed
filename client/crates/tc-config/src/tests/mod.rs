
use crate::{Config, ConfigError};

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Isolated config directory for one test.
///
/// Points `TC_CONFIG_DIR` at a fresh temp dir and hides any `TC_*` variable
/// inherited from the shell. Everything is put back on drop. Tests using it
/// must be `#[serial]`.
pub(crate) struct ConfigDir {
    dir: TempDir,
    saved: Vec<(String, Option<String>)>,
}

impl ConfigDir {
    pub(crate) fn new() -> Self {
        let mut fixture = Self {
            dir: TempDir::new().unwrap(),
            saved: Vec::new(),
        };

        let inherited: Vec<String> = env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with("TC_"))
            .collect();
        for key in inherited {
            fixture.replace(&key, None);
        }

        let dir = fixture.dir.path().to_str().unwrap().to_string();
        fixture.replace("TC_CONFIG_DIR", Some(&dir));
        fixture
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn with_env(mut self, key: &str, value: &str) -> Self {
        self.replace(key, Some(value));
        self
    }

    pub(crate) fn with_toml(self, contents: &str) -> Self {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
        self
    }

    pub(crate) fn load(&self) -> Config {
        Config::load().unwrap()
    }

    /// Load, then return the error `validate()` must produce.
    pub(crate) fn rejection(&self) -> ConfigError {
        self.load().validate().unwrap_err()
    }

    fn replace(&mut self, key: &str, value: Option<&str>) {
        self.saved.push((key.to_string(), env::var(key).ok()));
        set_or_remove(key, value);
    }
}

impl Drop for ConfigDir {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            set_or_remove(&key, value.as_deref());
        }
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    // Callers are #[serial], so no other thread reads the environment meanwhile
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
