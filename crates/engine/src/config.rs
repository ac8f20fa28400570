use crate::counter::DEFAULT_BUFFER_SIZE;
use crate::error::{EngineError, Result};
use derive_builder::Builder;
use std::path::PathBuf;

/// Settings for a single engine run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Root labels exactly as the user typed them.
    #[builder(default)]
    pub roots: Vec<String>,
    /// Directory relative roots are joined to. `None` means the process working directory.
    #[builder(default)]
    pub base_dir: Option<PathBuf>,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
    /// Abort on the first filesystem error instead of recording it and moving on.
    #[builder(default = "true")]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: vec![],
            base_dir: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
            strict: true,
        }
    }
}

impl Config {
    /// # Errors
    /// Returns `EngineError::Config` if the read buffer would be empty.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(EngineError::Config(
                "buffer size must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.buffer_size, default.buffer_size);
        assert_eq!(built.strict, default.strict);
        assert!(built.roots.is_empty());
        assert!(built.base_dir.is_none());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let config = Config {
            buffer_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }
}
