use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::ReviewStatus;

// Performance review models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::performance_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PerformanceReview {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub period_start: chrono::NaiveDate,
    pub period_end: chrono::NaiveDate,
    pub status: ReviewStatus,
    pub overall_rating: Option<i32>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::performance_reviews)]
pub struct NewPerformanceReview {
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub period_start: chrono::NaiveDate,
    pub period_end: chrono::NaiveDate,
    pub status: ReviewStatus,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::performance_reviews)]
pub struct UpdatePerformanceReview {
    pub period_start: Option<chrono::NaiveDate>,
    pub period_end: Option<chrono::NaiveDate>,
    pub overall_rating: Option<Option<i32>>,
    pub strengths: Option<Option<String>>,
    pub areas_for_improvement: Option<Option<String>>,
}

// Goal models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::performance_goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PerformanceGoal {
    pub id: Uuid,
    pub review_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<chrono::NaiveDate>,
    pub rating: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::performance_goals)]
pub struct NewPerformanceGoal {
    pub review_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<chrono::NaiveDate>,
    pub rating: Option<i32>,
}

// Competency models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::performance_competencies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PerformanceCompetency {
    pub id: Uuid,
    pub review_id: Uuid,
    pub name: String,
    pub rating: i32,
    pub comments: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::performance_competencies)]
pub struct NewPerformanceCompetency {
    pub review_id: Uuid,
    pub name: String,
    pub rating: i32,
    pub comments: Option<String>,
}

// Request/Response models. Goal and competency inputs are checked by
// `validation::performance` together with the period ordering rules.
#[derive(Deserialize)]
pub struct GoalInput {
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<chrono::NaiveDate>,
    pub rating: Option<i32>,
}

#[derive(Deserialize)]
pub struct CompetencyInput {
    pub name: String,
    pub rating: i32,
    pub comments: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CreatePerformanceReviewRequest {
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub period_start: chrono::NaiveDate,
    pub period_end: chrono::NaiveDate,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<Vec<GoalInput>>,
    pub competencies: Option<Vec<CompetencyInput>>,
}

#[derive(Deserialize, Validate)]
pub struct UpdatePerformanceReviewRequest {
    pub period_start: Option<chrono::NaiveDate>,
    pub period_end: Option<chrono::NaiveDate>,

    #[validate(range(min = 1, max = 5, message = "Overall rating must be between 1 and 5"))]
    pub overall_rating: Option<i32>,

    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
}

#[derive(Deserialize)]
pub struct ListPerformanceReviewsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub employee_id: Option<Uuid>,
    pub reviewer_id: Option<Uuid>,
    pub status: Option<ReviewStatus>,
}

/// A review joined with its owned goal and competency rows.
#[derive(Serialize)]
pub struct PerformanceReviewDetail {
    #[serde(flatten)]
    pub review: PerformanceReview,
    pub goals: Vec<PerformanceGoal>,
    pub competencies: Vec<PerformanceCompetency>,
}
