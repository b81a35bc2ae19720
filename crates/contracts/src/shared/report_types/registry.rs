//! Report-type registry
//!
//! Immutable table of report type configurations, built once at startup and
//! shared by reference. Tests can build a small registry of their own with
//! [`ReportTypeRegistry::new`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::report_type::ReportType;
use crate::shared::form_schema::FieldDefinition;

use super::config::{standard_configs, ReportTypeConfig};
use super::dto::ReportTypeOption;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown report type: {0}")]
    UnknownReportType(String),

    #[error("Report type '{report_type}' lists field '{field}' without a definition")]
    MissingFieldDefinition {
        report_type: ReportType,
        field: String,
    },

    #[error("Default report type '{0}' is not configured")]
    DefaultTypeMissing(ReportType),

    #[error("Report type '{0}' is configured twice")]
    DuplicateReportType(ReportType),
}

/// What to do when a caller names a report type the registry does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReportTypePolicy {
    /// Quietly use the default report type
    #[default]
    #[serde(alias = "fallback")]
    FallbackToDefault,
    Reject,
}

/// Result of a string lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLookup<'a> {
    Found(&'a ReportTypeConfig),
    /// The requested key was not recognized and the default config was used
    Defaulted {
        requested: String,
        config: &'a ReportTypeConfig,
    },
}

impl<'a> ConfigLookup<'a> {
    pub fn config(&self) -> &'a ReportTypeConfig {
        match self {
            ConfigLookup::Found(config) => *config,
            ConfigLookup::Defaulted { config, .. } => *config,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, ConfigLookup::Defaulted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ReportTypeRegistry {
    configs: Vec<ReportTypeConfig>,
    default_type: ReportType,
    policy: UnknownReportTypePolicy,
}

impl ReportTypeRegistry {
    /// Build a registry, rejecting configs that list undefined fields
    pub fn new(
        configs: Vec<ReportTypeConfig>,
        default_type: ReportType,
        policy: UnknownReportTypePolicy,
    ) -> Result<Self, RegistryError> {
        let mut seen = Vec::with_capacity(configs.len());
        for config in &configs {
            if seen.contains(&config.report_type) {
                return Err(RegistryError::DuplicateReportType(config.report_type));
            }
            seen.push(config.report_type);

            if let Some(field) = config.missing_definitions().first() {
                return Err(RegistryError::MissingFieldDefinition {
                    report_type: config.report_type,
                    field: field.to_string(),
                });
            }
        }

        if !seen.contains(&default_type) {
            return Err(RegistryError::DefaultTypeMissing(default_type));
        }

        Ok(Self {
            configs,
            default_type,
            policy,
        })
    }

    /// All washing/testing report types, Home Wash as the default
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(
            standard_configs(),
            ReportType::HomeWash,
            UnknownReportTypePolicy::FallbackToDefault,
        )
    }

    pub fn with_policy(self, policy: UnknownReportTypePolicy) -> Self {
        Self { policy, ..self }
    }

    pub fn policy(&self) -> UnknownReportTypePolicy {
        self.policy
    }

    pub fn default_type(&self) -> ReportType {
        self.default_type
    }

    pub fn default_config(&self) -> &ReportTypeConfig {
        // Presence checked in `new`
        self.configs
            .iter()
            .find(|c| c.report_type == self.default_type)
            .unwrap_or(&self.configs[0])
    }

    pub fn get(&self, report_type: ReportType) -> Option<&ReportTypeConfig> {
        self.configs.iter().find(|c| c.report_type == report_type)
    }

    /// Configs in declaration order
    pub fn configs(&self) -> impl Iterator<Item = &ReportTypeConfig> + '_ {
        self.configs.iter()
    }

    /// Look up a config by display name or code, applying the unknown-type policy
    pub fn lookup(&self, key: &str) -> Result<ConfigLookup<'_>, RegistryError> {
        if let Some(config) = ReportType::parse(key).and_then(|t| self.get(t)) {
            return Ok(ConfigLookup::Found(config));
        }
        match self.policy {
            UnknownReportTypePolicy::FallbackToDefault => Ok(ConfigLookup::Defaulted {
                requested: key.to_string(),
                config: self.default_config(),
            }),
            UnknownReportTypePolicy::Reject => {
                Err(RegistryError::UnknownReportType(key.to_string()))
            }
        }
    }

    /// Config for `key`, or the default config when `key` is not recognized.
    /// Never fails, whatever the policy.
    pub fn config_or_default(&self, key: &str) -> &ReportTypeConfig {
        ReportType::parse(key)
            .and_then(|t| self.get(t))
            .unwrap_or_else(|| self.default_config())
    }

    /// Selector options, one per configured report type, in declaration order.
    /// Each call starts a fresh iteration.
    pub fn report_type_options(&self) -> impl Iterator<Item = ReportTypeOption> + '_ {
        self.configs.iter().map(|c| ReportTypeOption {
            value: c.report_type,
            label: c.label.to_string(),
        })
    }

    /// Definition of `field` in the config for `key`, `None` when either is absent
    pub fn field_definition(&self, key: &str, field: &str) -> Option<&FieldDefinition> {
        let config = self.lookup(key).ok()?.config();
        config.field(field)
    }
}
