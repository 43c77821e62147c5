use crate::domain::{
    entities::{ProjectStructure, TemplateSet},
    error::DomainError,
    value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(raw)
    }

    pub fn validate_template_set(set: &TemplateSet) -> Result<(), DomainError> {
        set.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
