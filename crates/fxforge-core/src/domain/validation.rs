use crate::domain::{error::DomainError, plan::ScaffoldPlan, resource::ResourceConfig};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ResourceConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
