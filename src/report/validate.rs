//! Submission rules for a report

use super::model::Report;
use thiserror::Error;

/// First rule a report fails; checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, selecione o tipo de obra.")]
    MissingWorkType,

    #[error("Por favor, selecione pelo menos um colaborador.")]
    MissingCollaborators,

    #[error("Por favor, preencha o código para todos os itens de mão de obra.")]
    EmptyLaborCode,
}

/// Check a report before submission, stopping at the first failing rule
pub fn validate(report: &Report) -> Result<(), ValidationError> {
    if report.work_type.is_none() {
        return Err(ValidationError::MissingWorkType);
    }
    if report.collaborators.is_empty() {
        return Err(ValidationError::MissingCollaborators);
    }
    if report
        .labor_items
        .iter()
        .any(|item| item.code.trim().is_empty())
    {
        return Err(ValidationError::EmptyLaborCode);
    }
    Ok(())
}

pub fn is_valid(report: &Report) -> bool {
    validate(report).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ActionType, LaborItem, WorkType};

    fn valid_report() -> Report {
        Report {
            work_order: "OS-1".to_string(),
            work_type: Some(WorkType::Energisa),
            collaborators: vec!["Ana".to_string()],
            labor_items: vec![LaborItem::with_code("MO-01", 2, ActionType::Installation)],
            images: vec![],
        }
    }

    #[test]
    fn test_valid_report_passes() {
        assert_eq!(validate(&valid_report()), Ok(()));
        assert!(is_valid(&valid_report()));
    }

    #[test]
    fn test_missing_work_type_fails() {
        let report = Report {
            work_type: None,
            ..valid_report()
        };
        assert_eq!(validate(&report), Err(ValidationError::MissingWorkType));
        assert!(!is_valid(&report));
    }

    #[test]
    fn test_missing_collaborators_fails() {
        let report = Report {
            collaborators: vec![],
            ..valid_report()
        };
        assert_eq!(validate(&report), Err(ValidationError::MissingCollaborators));
    }

    #[test]
    fn test_blank_labor_code_fails() {
        let mut report = valid_report();
        report
            .labor_items
            .push(LaborItem::with_code("   ", 1, ActionType::Removal));
        assert_eq!(validate(&report), Err(ValidationError::EmptyLaborCode));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let report = Report {
            work_type: None,
            collaborators: vec![],
            labor_items: vec![LaborItem::new()],
            ..valid_report()
        };
        assert_eq!(validate(&report), Err(ValidationError::MissingWorkType));

        let report = Report {
            collaborators: vec![],
            labor_items: vec![LaborItem::new()],
            ..valid_report()
        };
        assert_eq!(validate(&report), Err(ValidationError::MissingCollaborators));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingWorkType.to_string(),
            "Por favor, selecione o tipo de obra."
        );
        assert_eq!(
            ValidationError::EmptyLaborCode.to_string(),
            "Por favor, preencha o código para todos os itens de mão de obra."
        );
    }
}
