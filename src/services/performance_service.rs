use diesel::prelude::*;

use crate::{
    db::enums::ReviewStatus,
    db::models::performance::{
        CreatePerformanceReviewRequest, NewPerformanceCompetency, NewPerformanceGoal,
        NewPerformanceReview, PerformanceReview, PerformanceReviewDetail,
        UpdatePerformanceReview, UpdatePerformanceReviewRequest,
    },
    db::repositories::employees::EmployeeRepo,
    db::repositories::performance::PerformanceRepo,
    error::AppError,
    services::context::RequestContext,
    validation,
};

pub struct PerformanceService;

impl PerformanceService {
    /// Creates a review in `DRAFT`, inserting any initial goals and
    /// competencies in the same transaction.
    pub fn create(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        req: &CreatePerformanceReviewRequest,
    ) -> Result<PerformanceReviewDetail, AppError> {
        validation::performance::validate_create_review(
            req.period_start,
            req.period_end,
            &req.goals,
            &req.competencies,
        )?;

        EmployeeRepo::find_by_id(conn, req.employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;
        EmployeeRepo::find_by_id(conn, req.reviewer_id)?
            .ok_or_else(|| AppError::not_found("Reviewer"))?;

        conn.transaction::<PerformanceReviewDetail, AppError, _>(|tx| {
            let new_review = NewPerformanceReview {
                employee_id: req.employee_id,
                reviewer_id: req.reviewer_id,
                period_start: req.period_start,
                period_end: req.period_end,
                status: ReviewStatus::Draft,
                strengths: req.strengths.clone(),
                areas_for_improvement: req.areas_for_improvement.clone(),
            };
            let review = PerformanceRepo::insert_review(tx, &new_review)?;

            let mut goals = Vec::new();
            if let Some(goal_inputs) = &req.goals {
                for input in goal_inputs {
                    let new_goal = NewPerformanceGoal {
                        review_id: review.id,
                        title: input.title.clone(),
                        description: input.description.clone(),
                        target_date: input.target_date,
                        rating: input.rating,
                    };
                    goals.push(PerformanceRepo::insert_goal(tx, &new_goal)?);
                }
            }

            let mut competencies = Vec::new();
            if let Some(competency_inputs) = &req.competencies {
                for input in competency_inputs {
                    let new_competency = NewPerformanceCompetency {
                        review_id: review.id,
                        name: input.name.clone(),
                        rating: input.rating,
                        comments: input.comments.clone(),
                    };
                    competencies.push(PerformanceRepo::insert_competency(tx, &new_competency)?);
                }
            }

            Ok(PerformanceReviewDetail {
                review,
                goals,
                competencies,
            })
        })
    }

    pub fn get(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        review_id: uuid::Uuid,
    ) -> Result<PerformanceReviewDetail, AppError> {
        let review = PerformanceRepo::find_review(conn, review_id)?
            .ok_or_else(|| AppError::not_found("Performance review"))?;
        let goals = PerformanceRepo::list_goals(conn, review_id)?;
        let competencies = PerformanceRepo::list_competencies(conn, review_id)?;
        Ok(PerformanceReviewDetail {
            review,
            goals,
            competencies,
        })
    }

    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee: Option<uuid::Uuid>,
        reviewer: Option<uuid::Uuid>,
        status: Option<ReviewStatus>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<PerformanceReview>, i64), AppError> {
        let total = PerformanceRepo::count_reviews(conn, employee, reviewer, status.clone())?;
        let rows = PerformanceRepo::list_reviews(conn, employee, reviewer, status, page, page_size)?;
        Ok((rows, total))
    }

    /// A finalized review is immutable.
    pub fn update(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        review_id: uuid::Uuid,
        req: &UpdatePerformanceReviewRequest,
    ) -> Result<PerformanceReview, AppError> {
        let review = PerformanceRepo::find_review(conn, review_id)?
            .ok_or_else(|| AppError::not_found("Performance review"))?;

        if review.status == ReviewStatus::Finalized {
            return Err(AppError::failed_precondition(
                "cannot update a finalized review",
            ));
        }

        let start = req.period_start.unwrap_or(review.period_start);
        let end = req.period_end.unwrap_or(review.period_end);
        validation::performance::validate_review_period(start, end)?;

        let changes = UpdatePerformanceReview {
            period_start: req.period_start,
            period_end: req.period_end,
            overall_rating: req.overall_rating.map(Some),
            strengths: req.strengths.clone().map(Some),
            areas_for_improvement: req.areas_for_improvement.clone().map(Some),
        };
        Ok(PerformanceRepo::update_fields(conn, review_id, &changes)?)
    }

    pub fn submit(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        review_id: uuid::Uuid,
    ) -> Result<PerformanceReview, AppError> {
        Self::transition(conn, review_id, ReviewStatus::Draft, ReviewStatus::Submitted)
    }

    pub fn finalize(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        review_id: uuid::Uuid,
    ) -> Result<PerformanceReview, AppError> {
        Self::transition(
            conn,
            review_id,
            ReviewStatus::Submitted,
            ReviewStatus::Finalized,
        )
    }

    fn transition(
        conn: &mut PgConnection,
        review_id: uuid::Uuid,
        from: ReviewStatus,
        to: ReviewStatus,
    ) -> Result<PerformanceReview, AppError> {
        let review = PerformanceRepo::find_review(conn, review_id)?
            .ok_or_else(|| AppError::not_found("Performance review"))?;

        if review.status != from {
            return Err(AppError::failed_precondition(format!(
                "cannot move review from {} to {}",
                review.status, to
            )));
        }

        PerformanceRepo::transition_status(conn, review_id, from, to)?.ok_or_else(|| {
            AppError::failed_precondition("Review status changed concurrently")
        })
    }

    /// Deletes the review and its owned goal/competency rows together.
    pub fn delete(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        review_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        let review = PerformanceRepo::find_review(conn, review_id)?
            .ok_or_else(|| AppError::not_found("Performance review"))?;

        if review.status == ReviewStatus::Finalized {
            return Err(AppError::failed_precondition(
                "cannot delete a finalized review",
            ));
        }

        conn.transaction::<(), AppError, _>(|tx| {
            PerformanceRepo::delete_goals_for(tx, review_id)?;
            PerformanceRepo::delete_competencies_for(tx, review_id)?;
            PerformanceRepo::delete_review(tx, review_id)?;
            Ok(())
        })
    }
}
