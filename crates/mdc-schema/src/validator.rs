//! # Validator
//!
//! Orchestrates a validation run: checks the document's declared mode, then
//! runs the strict profile's evaluators in their fixed order.

use mdc_core::Value;

use crate::error::SchemaError;
use crate::profile::StrictProfile;
use crate::result::ValidationResult;

/// Document key declaring the validation mode.
pub const VALIDATION_MODE_KEY: &str = "validationMode";

/// The only mode that triggers checks.
pub const STRICT_MODE: &str = "strict";

/// A constitution compiled for validating documents.
///
/// Construction parses every rule, so a broken constitution fails here
/// rather than while checking an unrelated document. The validator holds
/// no mutable state; one instance can check any number of documents, from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct Validator {
    profile: StrictProfile,
}

impl Validator {
    /// Compile the strict profile of `schema`.
    ///
    /// # Errors
    ///
    /// Any [`SchemaError`] raised by [`StrictProfile::from_schema`].
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        Ok(Self::from_profile(StrictProfile::from_schema(schema)?))
    }

    /// Wrap an already-compiled profile.
    pub fn from_profile(profile: StrictProfile) -> Self {
        Self { profile }
    }

    /// The compiled strict profile.
    pub fn profile(&self) -> &StrictProfile {
        &self.profile
    }

    /// Validate `document`.
    ///
    /// Documents whose `validationMode` is not the string `strict` pass
    /// without being checked. Otherwise findings are ordered by evaluator
    /// (`strict.required`, `strict.requireFields`, `strict.requireIf`), then
    /// by rule order in the constitution, then by list index.
    pub fn validate(&self, document: &Value) -> ValidationResult {
        let mode = document.get(VALIDATION_MODE_KEY).and_then(Value::as_str);
        if mode != Some(STRICT_MODE) {
            tracing::debug!(mode = ?mode, "document is not in strict mode; skipping checks");
            return ValidationResult::pass();
        }

        let mut findings = Vec::new();
        for evaluator in self.profile.evaluators() {
            let before = findings.len();
            evaluator.evaluate(document, &mut findings);
            tracing::debug!(
                rule_id = %evaluator.rule_id(),
                findings = findings.len() - before,
                "evaluated rule set"
            );
        }

        let result = ValidationResult::from_errors(findings);
        tracing::info!(
            valid = result.is_valid(),
            errors = result.len(),
            "strict validation complete"
        );
        result
    }
}

/// Compile `schema` and validate `document` against it in one call.
///
/// # Errors
///
/// Any [`SchemaError`] raised while compiling `schema`.
pub fn validate(document: &Value, schema: &Value) -> Result<ValidationResult, SchemaError> {
    Ok(Validator::new(schema)?.validate(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RuleId;
    use proptest::prelude::*;

    fn yaml(src: &str) -> Value {
        Value::try_from(serde_yaml::from_str::<serde_yaml::Value>(src).unwrap()).unwrap()
    }

    fn constitution() -> Value {
        yaml(
            r#"
validationProfiles:
  strict:
    required: [domain.entities, tests]
    requireFields:
      performance.metricsTable[*]: [metric, budget_ms]
    requireIf:
      - when: "$.mgiContract.docType == 'mdc-constitution'"
        paths: [mergePolicy.arrayKeyBy]
"#,
        )
    }

    #[test]
    fn scenario_missing_required_section() {
        let result = validate(&yaml("validationMode: strict\ntests: []"), &constitution()).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.len(), 1);
        assert_eq!(result.errors()[0].rule_id, RuleId::Required);
        assert_eq!(result.errors()[0].path, "domain.entities");
    }

    #[test]
    fn scenario_missing_list_field() {
        let doc = yaml(
            "validationMode: strict\ndomain: {entities: []}\ntests: []\nperformance:\n  metricsTable:\n    - metric: X\n",
        );
        let result = validate(&doc, &constitution()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.errors()[0].rule_id, RuleId::RequireFields);
        assert_eq!(result.errors()[0].path, "performance.metricsTable[0]");
    }

    #[test]
    fn scenario_conditional_requirement() {
        let doc = yaml(
            "validationMode: strict\ndomain: {entities: []}\ntests: []\nmgiContract: {docType: mdc-constitution}\n",
        );
        let result = validate(&doc, &constitution()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.errors()[0].rule_id, RuleId::RequireIf);
        assert_eq!(result.errors()[0].path, "mergePolicy.arrayKeyBy");
    }

    #[test]
    fn findings_ordered_by_evaluator() {
        let doc = yaml(
            "validationMode: strict\nmgiContract: {docType: mdc-constitution}\nperformance:\n  metricsTable: [{}]\n",
        );
        let result = validate(&doc, &constitution()).unwrap();
        let ids: Vec<RuleId> = result.errors().iter().map(|e| e.rule_id).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::Required,
                RuleId::Required,
                RuleId::RequireFields,
                RuleId::RequireFields,
                RuleId::RequireIf,
            ]
        );
    }

    #[test]
    fn complete_document_is_valid() {
        let doc = yaml(
            r#"
validationMode: strict
domain: {entities: [], rules: []}
tests: []
performance:
  metricsTable:
    - {metric: Load.DurationMs, budget_ms: 200}
mgiContract: {docType: mdc-constitution}
mergePolicy: {arrayKeyBy: id}
"#,
        );
        let result = validate(&doc, &constitution()).unwrap();
        assert!(result.is_valid(), "unexpected findings: {:?}", result.errors());
    }

    #[test]
    fn mode_must_be_exactly_strict() {
        let validator = Validator::new(&constitution()).unwrap();
        for doc in ["validationMode: Strict", "validationMode: lenient", "other: 1", "validationMode: [strict]"] {
            let result = validator.validate(&yaml(doc));
            assert!(result.is_valid(), "{doc} should not be checked");
            assert!(result.is_empty());
        }
    }

    #[test]
    fn constitution_without_strict_profile_passes_everything() {
        let validator = Validator::new(&yaml("title: empty")).unwrap();
        assert!(validator.profile().is_empty());
        assert!(validator.validate(&yaml("validationMode: strict")).is_valid());
    }

    #[test]
    fn broken_constitution_fails_before_validation() {
        let schema = yaml("validationProfiles:\n  strict:\n    requireIf:\n      - when: no separator\n");
        assert!(matches!(
            validate(&yaml("validationMode: lenient"), &schema),
            Err(SchemaError::MalformedCondition { .. })
        ));
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();

        let validator = std::sync::Arc::new(Validator::new(&constitution()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let validator = validator.clone();
                std::thread::spawn(move || validator.validate(&yaml("validationMode: strict")).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }

    fn arbitrary_document() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::null()),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z_]{0,12}".prop_map(Value::string),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("domain".to_string()),
                        Just("performance".to_string()),
                        Just("metricsTable".to_string()),
                        Just("mgiContract".to_string()),
                        Just("docType".to_string()),
                        "[a-z]{1,8}",
                    ],
                    inner,
                    0..6,
                )
                .prop_map(|m| m.into_iter().collect::<Value>()),
            ]
        })
    }

    proptest! {
        /// Documents that are not in strict mode always pass untouched.
        #[test]
        fn non_strict_documents_always_pass(body in arbitrary_document(), mode in "[a-z]{0,8}") {
            prop_assume!(mode != STRICT_MODE);
            let mut doc = match body {
                Value::Mapping(map) => map,
                _ => Default::default(),
            };
            doc.insert(VALIDATION_MODE_KEY.to_string(), Value::string(mode));
            let result = validate(&Value::Mapping(doc), &constitution()).unwrap();
            prop_assert!(result.is_valid());
            prop_assert!(result.is_empty());
        }

        /// Validating the same pair twice yields identical results.
        #[test]
        fn validation_is_idempotent(body in arbitrary_document()) {
            let mut doc = match body {
                Value::Mapping(map) => map,
                _ => Default::default(),
            };
            doc.insert(VALIDATION_MODE_KEY.to_string(), Value::string(STRICT_MODE));
            let doc = Value::Mapping(doc);
            let validator = Validator::new(&constitution()).unwrap();
            let first = validator.validate(&doc);
            let second = validator.validate(&doc);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.is_valid(), first.errors().is_empty());
        }
    }
}
