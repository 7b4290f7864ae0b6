use chrono::NaiveDate;
use hr_backend::db::models::{CompetencyInput, GoalInput, UpdatePerformanceReviewRequest};
use hr_backend::validation::performance::{validate_create_review, validate_review_period};
use validator::Validate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_review_period_must_be_ordered() {
    assert!(validate_review_period(date(2024, 1, 1), date(2024, 6, 30)).is_ok());
    assert!(validate_review_period(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    assert!(validate_review_period(date(2024, 6, 30), date(2024, 1, 1)).is_err());
}

#[test]
fn test_goal_inputs_are_checked() {
    let goals = Some(vec![GoalInput {
        title: "Deliver onboarding revamp".to_string(),
        description: Some("Rework the first-week checklist".to_string()),
        target_date: Some(date(2024, 9, 30)),
        rating: Some(4),
    }]);
    assert!(validate_create_review(date(2024, 1, 1), date(2024, 6, 30), &goals, &None).is_ok());

    let blank_title = Some(vec![GoalInput {
        title: "   ".to_string(),
        description: None,
        target_date: None,
        rating: None,
    }]);
    assert!(
        validate_create_review(date(2024, 1, 1), date(2024, 6, 30), &blank_title, &None).is_err()
    );

    let rating_out_of_range = Some(vec![GoalInput {
        title: "Reduce ticket backlog".to_string(),
        description: None,
        target_date: None,
        rating: Some(0),
    }]);
    assert!(
        validate_create_review(
            date(2024, 1, 1),
            date(2024, 6, 30),
            &rating_out_of_range,
            &None
        )
        .is_err()
    );
}

#[test]
fn test_competency_inputs_are_checked() {
    let competencies = Some(vec![CompetencyInput {
        name: "Communication".to_string(),
        rating: 5,
        comments: None,
    }]);
    assert!(
        validate_create_review(date(2024, 1, 1), date(2024, 6, 30), &None, &competencies).is_ok()
    );

    let blank_name = Some(vec![CompetencyInput {
        name: "".to_string(),
        rating: 3,
        comments: None,
    }]);
    assert!(
        validate_create_review(date(2024, 1, 1), date(2024, 6, 30), &None, &blank_name).is_err()
    );

    let rating_too_high = Some(vec![CompetencyInput {
        name: "Teamwork".to_string(),
        rating: 6,
        comments: None,
    }]);
    assert!(
        validate_create_review(date(2024, 1, 1), date(2024, 6, 30), &None, &rating_too_high)
            .is_err()
    );
}

#[test]
fn test_update_review_overall_rating_bounds() {
    let req = UpdatePerformanceReviewRequest {
        period_start: None,
        period_end: None,
        overall_rating: Some(3),
        strengths: None,
        areas_for_improvement: None,
    };
    assert!(req.validate().is_ok());

    let req = UpdatePerformanceReviewRequest {
        period_start: None,
        period_end: None,
        overall_rating: Some(0),
        strengths: None,
        areas_for_improvement: None,
    };
    assert!(req.validate().is_err());

    let req = UpdatePerformanceReviewRequest {
        period_start: None,
        period_end: None,
        overall_rating: Some(6),
        strengths: None,
        areas_for_improvement: None,
    };
    assert!(req.validate().is_err());
}
