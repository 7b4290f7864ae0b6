use crate::db::models::performance::{CompetencyInput, GoalInput};
use crate::error::AppError;

pub fn validate_review_period(
    period_start: chrono::NaiveDate,
    period_end: chrono::NaiveDate,
) -> Result<(), AppError> {
    if period_end < period_start {
        return Err(AppError::validation(
            "Review period end must be on or after period start",
        ));
    }
    Ok(())
}

pub fn validate_create_review(
    period_start: chrono::NaiveDate,
    period_end: chrono::NaiveDate,
    goals: &Option<Vec<GoalInput>>,
    competencies: &Option<Vec<CompetencyInput>>,
) -> Result<(), AppError> {
    validate_review_period(period_start, period_end)?;

    if let Some(goals) = goals {
        for goal in goals {
            if goal.title.trim().is_empty() {
                return Err(AppError::validation("Goal title is required"));
            }
            if goal.title.len() > 255 {
                return Err(AppError::validation(
                    "Goal title is too long (max 255 characters)",
                ));
            }
            if let Some(rating) = goal.rating {
                if !(1..=5).contains(&rating) {
                    return Err(AppError::validation("Goal rating must be between 1 and 5"));
                }
            }
        }
    }

    if let Some(competencies) = competencies {
        for competency in competencies {
            if competency.name.trim().is_empty() {
                return Err(AppError::validation("Competency name is required"));
            }
            if competency.name.len() > 255 {
                return Err(AppError::validation(
                    "Competency name is too long (max 255 characters)",
                ));
            }
            if !(1..=5).contains(&competency.rating) {
                return Err(AppError::validation(
                    "Competency rating must be between 1 and 5",
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_review_period_ordering() {
        assert!(validate_review_period(date(2025, 1, 1), date(2025, 6, 30)).is_ok());
        assert!(validate_review_period(date(2025, 1, 1), date(2025, 1, 1)).is_ok());
        assert!(validate_review_period(date(2025, 6, 30), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_create_review_validation() {
        let goals = Some(vec![GoalInput {
            title: "Ship the reporting dashboard".to_string(),
            description: None,
            target_date: None,
            rating: None,
        }]);
        assert!(validate_create_review(date(2025, 1, 1), date(2025, 6, 30), &goals, &None).is_ok());

        let empty_title = Some(vec![GoalInput {
            title: "  ".to_string(),
            description: None,
            target_date: None,
            rating: None,
        }]);
        assert!(
            validate_create_review(date(2025, 1, 1), date(2025, 6, 30), &empty_title, &None)
                .is_err()
        );

        let bad_rating = Some(vec![CompetencyInput {
            name: "Communication".to_string(),
            rating: 6,
            comments: None,
        }]);
        assert!(
            validate_create_review(date(2025, 1, 1), date(2025, 6, 30), &None, &bad_rating)
                .is_err()
        );
    }
}
