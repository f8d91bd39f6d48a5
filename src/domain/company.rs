//! Company profiles loaded from configuration.
//!
//! Each config section names one company; its keys carry the ticker, display
//! color, description and assigned analyst. Every profile is validated before
//! the directory is built.

use crate::domain::error::EquiscoreError;
use crate::ports::config_port::ConfigPort;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub name: String,
    pub ticker: String,
    /// `#RRGGBB`.
    pub color: String,
    pub description: String,
    pub analyst: String,
}

/// Lookup of configured companies by display name, in config order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDirectory {
    companies: Vec<CompanyProfile>,
}

impl CompanyDirectory {
    pub fn new(companies: Vec<CompanyProfile>) -> Self {
        Self { companies }
    }

    /// Read and validate every section of `config` as a company profile.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, EquiscoreError> {
        let sections = config.sections();
        if sections.is_empty() {
            return Err(EquiscoreError::ConfigMissing {
                section: "<company>".to_string(),
                key: "ticker".to_string(),
            });
        }

        let mut companies = Vec::with_capacity(sections.len());
        for section in sections {
            let profile = load_profile(config, &section)?;
            if companies
                .iter()
                .any(|c: &CompanyProfile| c.ticker == profile.ticker)
            {
                return Err(EquiscoreError::ConfigInvalid {
                    section,
                    key: "ticker".to_string(),
                    reason: format!("ticker {} is assigned to another company", profile.ticker),
                });
            }
            companies.push(profile);
        }
        Ok(Self { companies })
    }

    pub fn get(&self, name: &str) -> Result<&CompanyProfile, EquiscoreError> {
        self.companies
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| EquiscoreError::UnknownCompany {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.companies.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyProfile> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

fn load_profile(config: &dyn ConfigPort, section: &str) -> Result<CompanyProfile, EquiscoreError> {
    let ticker = required(config, section, "ticker")?;
    validate_ticker(section, &ticker)?;
    let color = required(config, section, "color")?;
    validate_color(section, &color)?;

    Ok(CompanyProfile {
        name: section.to_string(),
        ticker,
        color,
        description: required(config, section, "description")?,
        analyst: required(config, section, "analyst")?,
    })
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, EquiscoreError> {
    config
        .get_string(section, key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EquiscoreError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn validate_ticker(section: &str, ticker: &str) -> Result<(), EquiscoreError> {
    let valid = ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
    if !valid {
        return Err(EquiscoreError::ConfigInvalid {
            section: section.to_string(),
            key: "ticker".to_string(),
            reason: format!("'{}' contains characters not allowed in a ticker", ticker),
        });
    }
    Ok(())
}

fn validate_color(section: &str, color: &str) -> Result<(), EquiscoreError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EquiscoreError::ConfigInvalid {
            section: section.to_string(),
            key: "color".to_string(),
            reason: format!("'{}' is not a #RRGGBB color", color),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapConfig {
        sections: Vec<String>,
        values: HashMap<(String, String), String>,
    }

    impl MapConfig {
        fn with(mut self, section: &str, keys: &[(&str, &str)]) -> Self {
            self.sections.push(section.to_string());
            for (k, v) in keys {
                self.values
                    .insert((section.to_string(), k.to_string()), v.to_string());
            }
            self
        }

        fn company(self, section: &str, ticker: &str, color: &str, analyst: &str) -> Self {
            self.with(
                section,
                &[
                    ("ticker", ticker),
                    ("color", color),
                    ("description", "Aerospace - Aviation"),
                    ("analyst", analyst),
                ],
            )
        }
    }

    impl ConfigPort for MapConfig {
        fn sections(&self) -> Vec<String> {
            self.sections.clone()
        }

        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.values
                .get(&(section.to_string(), key.to_string()))
                .cloned()
        }
    }

    fn airbus() -> MapConfig {
        MapConfig::default().company("Airbus", "AIR.PA", "#00A8E8", "XU")
    }

    #[test]
    fn loads_valid_profiles_in_order() {
        let config = airbus().company("Sopra Steria", "SOP.PA", "#6a4c93", "Yann");
        let directory = CompanyDirectory::from_config(&config).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory.names().collect::<Vec<_>>(),
            vec!["Airbus", "Sopra Steria"]
        );
        let airbus = directory.get("Airbus").unwrap();
        assert_eq!(airbus.ticker, "AIR.PA");
        assert_eq!(airbus.analyst, "XU");
    }

    #[test]
    fn unknown_company_is_an_error() {
        let directory = CompanyDirectory::from_config(&airbus()).unwrap();
        let err = directory.get("Boeing").unwrap_err();
        assert!(matches!(err, EquiscoreError::UnknownCompany { ref name } if name == "Boeing"));
    }

    #[test]
    fn empty_config_is_rejected() {
        let err = CompanyDirectory::from_config(&MapConfig::default()).unwrap_err();
        assert!(matches!(err, EquiscoreError::ConfigMissing { .. }));
    }

    #[test]
    fn blank_analyst_is_missing() {
        let config = MapConfig::default().company("Airbus", "AIR.PA", "#00A8E8", "   ");
        let err = CompanyDirectory::from_config(&config).unwrap_err();
        assert!(
            matches!(err, EquiscoreError::ConfigMissing { ref section, ref key } if section == "Airbus" && key == "analyst")
        );
    }

    #[test]
    fn missing_description_is_rejected() {
        let config = MapConfig::default().with(
            "Airbus",
            &[("ticker", "AIR.PA"), ("color", "#00A8E8"), ("analyst", "XU")],
        );
        let err = CompanyDirectory::from_config(&config).unwrap_err();
        assert!(matches!(err, EquiscoreError::ConfigMissing { ref key, .. } if key == "description"));
    }

    #[test]
    fn bad_color_is_rejected() {
        for color in ["00A8E8", "#00A8E", "#00A8EZ", "blue"] {
            let config = MapConfig::default().company("Airbus", "AIR.PA", color, "XU");
            let err = CompanyDirectory::from_config(&config).unwrap_err();
            assert!(
                matches!(err, EquiscoreError::ConfigInvalid { ref key, .. } if key == "color"),
                "color {} accepted",
                color
            );
        }
    }

    #[test]
    fn bad_ticker_is_rejected() {
        let config = MapConfig::default().company("Airbus", "AIR PA", "#00A8E8", "XU");
        let err = CompanyDirectory::from_config(&config).unwrap_err();
        assert!(matches!(err, EquiscoreError::ConfigInvalid { ref key, .. } if key == "ticker"));
    }

    #[test]
    fn duplicate_ticker_is_rejected() {
        let config = airbus().company("Airbus Group", "AIR.PA", "#00A8E8", "XU");
        let err = CompanyDirectory::from_config(&config).unwrap_err();
        assert!(
            matches!(err, EquiscoreError::ConfigInvalid { ref section, .. } if section == "Airbus Group")
        );
    }
}
