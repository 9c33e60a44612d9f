use serde::{Deserialize, Serialize};

/// Form fields that can carry a validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    StartDate,
    EndDate,
    NumberOfDays,
    Purpose,
    DurationHours,
    ActivityDate,
}

/// Outcome of one validation rule against one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: FormField,
    pub is_valid: bool,
    pub message: Option<String>,
}

impl FieldCheck {
    pub fn valid(field: FormField) -> Self {
        Self {
            field,
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Validation outcome for a whole form, built once per submit attempt.
///
/// The form is submittable exactly when [`FormValidation::is_valid`] holds;
/// individual field flags only drive error rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValidation {
    pub checks: Vec<FieldCheck>,
}

impl FormValidation {
    pub fn push(&mut self, check: FieldCheck) {
        self.checks.push(check);
    }

    /// True when no check failed
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|check| check.is_valid)
    }

    /// True when at least one failed check targets `field`
    pub fn field_invalid(&self, field: FormField) -> bool {
        self.checks
            .iter()
            .any(|check| check.field == field && !check.is_valid)
    }

    /// Message of the first failed check targeting `field`, if any
    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.checks
            .iter()
            .find(|check| check.field == field && !check.is_valid)
            .and_then(|check| check.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_validation_is_valid() {
        assert!(FormValidation::default().is_valid());
    }

    #[test]
    fn test_one_failed_check_invalidates_the_form() {
        let mut validation = FormValidation::default();
        validation.push(FieldCheck::valid(FormField::Purpose));
        validation.push(FieldCheck::invalid(FormField::StartDate, "Start must be before end"));

        assert!(!validation.is_valid());
        assert!(validation.field_invalid(FormField::StartDate));
        assert!(!validation.field_invalid(FormField::Purpose));
    }

    #[test]
    fn test_message_for_returns_the_first_failure() {
        let mut validation = FormValidation::default();
        validation.push(FieldCheck::invalid(FormField::NumberOfDays, "At least 1 day"));
        validation.push(FieldCheck::invalid(FormField::NumberOfDays, "Later message"));

        assert_eq!(
            validation.message_for(FormField::NumberOfDays),
            Some("At least 1 day")
        );
        assert_eq!(validation.message_for(FormField::EndDate), None);
    }

    #[test]
    fn test_valid_checks_carry_no_message() {
        let check = FieldCheck::valid(FormField::ActivityDate);
        assert!(check.is_valid);
        assert!(check.message.is_none());
    }
}
