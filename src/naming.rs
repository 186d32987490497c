//! Run name generation.
//!
//! Step Functions refuses to reuse an execution name for 90 days, so every
//! run name carries a nanosecond timestamp after the configured prefix.

use chrono::{DateTime, Utc};

use crate::error::ChunkyError;

/// Longest name Step Functions accepts for an execution.
pub const MAX_EXECUTION_NAME_LENGTH: usize = 80;

/// Builds the run name `{prefix}_{timestamp}` for a run started at `now`.
///
/// The timestamp is whole seconds since the epoch followed by the nine-digit
/// nanosecond fraction, so names sort by start time.
///
/// # Errors
///
/// Returns a validation error if the resulting name is not accepted by the
/// orchestrator.
pub fn execution_name(prefix: &str, now: DateTime<Utc>) -> Result<String, ChunkyError> {
    let name = format!(
        "{}_{}{:09}",
        prefix,
        now.timestamp(),
        now.timestamp_subsec_nanos()
    );
    validate_execution_name(&name)?;
    Ok(name)
}

/// Checks a run name against the orchestrator's naming rules.
pub fn validate_execution_name(name: &str) -> Result<(), ChunkyError> {
    if name.is_empty() {
        return Err(ChunkyError::validation("Execution name must not be empty"));
    }

    if name.len() > MAX_EXECUTION_NAME_LENGTH {
        return Err(ChunkyError::validation(format!(
            "Execution name must be at most {} characters, got {}",
            MAX_EXECUTION_NAME_LENGTH,
            name.len()
        )));
    }

    if let Some(invalid) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ChunkyError::validation(format!(
            "Execution name '{}' contains invalid character {:?}",
            name, invalid
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn test_execution_name_format() {
        let now = Utc.timestamp_opt(1_700_000_000, 42).unwrap();
        let name = execution_name("chunky", now).unwrap();
        assert_eq!(name, "chunky_1700000000000000042");
    }

    #[test]
    fn test_execution_names_differ_by_nanosecond() {
        let first = Utc.timestamp_opt(1_700_000_000, 1).unwrap();
        let second = Utc.timestamp_opt(1_700_000_000, 2).unwrap();
        assert_ne!(
            execution_name("chunky", first).unwrap(),
            execution_name("chunky", second).unwrap()
        );
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let err = execution_name("my run", now).unwrap_err();
        assert!(matches!(err, ChunkyError::Validation { .. }));
    }

    #[test]
    fn test_overlong_prefix_is_rejected() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let prefix = "p".repeat(MAX_EXECUTION_NAME_LENGTH);
        assert!(execution_name(&prefix, now).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(validate_execution_name("").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_prefix_produces_valid_name(
            prefix in "[a-zA-Z0-9_-]{1,40}",
            secs in 0i64..4_000_000_000i64,
            nanos in 0u32..1_000_000_000u32,
        ) {
            let now = Utc.timestamp_opt(secs, nanos).unwrap();
            let name = execution_name(&prefix, now).unwrap();
            let expected_prefix = format!("{}_", prefix);
            prop_assert!(name.starts_with(&expected_prefix));
            prop_assert!(name.len() <= MAX_EXECUTION_NAME_LENGTH);
        }
    }
}
