//! # Strict Profile
//!
//! A constitution declares its rules under
//! `validationProfiles.strict`:
//!
//! ```yaml
//! validationProfiles:
//!   strict:
//!     required: [domain.entities, tests]
//!     requireFields:
//!       performance.metricsTable[*]: [metric, budget_ms]
//!     requireIf:
//!       - when: "$.mgiContract.docType == 'mdc-constitution'"
//!         paths: [mergePolicy.arrayKeyBy]
//! ```
//!
//! Only the `strict` profile is read. A constitution without it, or
//! without `validationProfiles` at all, compiles to an empty profile.

use mdc_core::Value;

use crate::error::SchemaError;
use crate::rules::{
    entry, ConditionalRequirements, RequiredListFields, RequiredPaths, RuleEvaluator,
};

/// Top-level constitution key holding the named profiles.
pub const PROFILES_KEY: &str = "validationProfiles";

/// Name of the only profile that is enforced.
pub const STRICT_PROFILE: &str = "strict";

/// The compiled `strict` profile of a constitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictProfile {
    required: RequiredPaths,
    require_fields: RequiredListFields,
    require_if: ConditionalRequirements,
}

impl StrictProfile {
    /// Assemble a profile from compiled rule sets.
    pub fn new(
        required: RequiredPaths,
        require_fields: RequiredListFields,
        require_if: ConditionalRequirements,
    ) -> Self {
        Self {
            required,
            require_fields,
            require_if,
        }
    }

    /// Compile the strict profile of `schema`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidShape`] if a profile entry has the wrong
    /// structure, [`SchemaError::MalformedCondition`] for a `requireIf`
    /// clause without `==`.
    pub fn from_schema(schema: &Value) -> Result<Self, SchemaError> {
        let Some(profiles) = entry(schema, PROFILES_KEY) else {
            tracing::debug!("constitution has no {PROFILES_KEY}; strict profile is empty");
            return Ok(Self::default());
        };
        if !profiles.is_mapping() {
            return Err(SchemaError::InvalidShape {
                location: PROFILES_KEY.to_string(),
                expected: "a mapping of profiles",
                found: profiles.kind(),
            });
        }

        let location = format!("{PROFILES_KEY}.{STRICT_PROFILE}");
        let Some(strict) = entry(profiles, STRICT_PROFILE) else {
            tracing::debug!("constitution has no strict profile; nothing to enforce");
            return Ok(Self::default());
        };
        if !strict.is_mapping() {
            return Err(SchemaError::InvalidShape {
                location,
                expected: "a mapping",
                found: strict.kind(),
            });
        }

        let profile = Self::new(
            RequiredPaths::compile(entry(strict, "required"), &format!("{location}.required"))?,
            RequiredListFields::compile(
                entry(strict, "requireFields"),
                &format!("{location}.requireFields"),
            )?,
            ConditionalRequirements::compile(
                entry(strict, "requireIf"),
                &format!("{location}.requireIf"),
            )?,
        );

        tracing::debug!(
            required = profile.required.paths().len(),
            require_fields = profile.require_fields.rules().len(),
            require_if = profile.require_if.rules().len(),
            "compiled strict profile"
        );
        Ok(profile)
    }

    /// Rules from `required`.
    pub fn required(&self) -> &RequiredPaths {
        &self.required
    }

    /// Rules from `requireFields`.
    pub fn require_fields(&self) -> &RequiredListFields {
        &self.require_fields
    }

    /// Rules from `requireIf`.
    pub fn require_if(&self) -> &ConditionalRequirements {
        &self.require_if
    }

    /// The evaluators in the order they run.
    pub fn evaluators(&self) -> [&dyn RuleEvaluator; 3] {
        [&self.required, &self.require_fields, &self.require_if]
    }

    /// Total number of compiled rules.
    pub fn rule_count(&self) -> usize {
        self.required.paths().len()
            + self.require_fields.rules().len()
            + self.require_if.rules().len()
    }

    /// True if the profile enforces nothing.
    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}
