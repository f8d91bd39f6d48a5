//! INI file configuration adapter.
//!
//! Section and key names are case sensitive so company display names survive
//! as written. Only `;` starts a comment; `#` belongs to color values.

use crate::domain::error::EquiscoreError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EquiscoreError> {
        let path = path.as_ref();
        let mut config = Self::parser();
        config.load(path).map_err(|reason| EquiscoreError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, EquiscoreError> {
        let mut config = Self::parser();
        config
            .read(content.to_string())
            .map_err(|reason| EquiscoreError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    fn parser() -> Ini {
        let mut config = Ini::new_cs();
        config.set_comment_symbols(&[';']);
        config
    }
}

impl ConfigPort for FileConfigAdapter {
    fn sections(&self) -> Vec<String> {
        self.config.sections()
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}
