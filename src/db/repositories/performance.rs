use diesel::prelude::*;

use crate::db::enums::ReviewStatus;
use crate::db::models::performance::{
    NewPerformanceCompetency, NewPerformanceGoal, NewPerformanceReview, PerformanceCompetency,
    PerformanceGoal, PerformanceReview, UpdatePerformanceReview,
};

pub struct PerformanceRepo;

impl PerformanceRepo {
    pub fn insert_review(
        conn: &mut PgConnection,
        new_review: &NewPerformanceReview,
    ) -> Result<PerformanceReview, diesel::result::Error> {
        diesel::insert_into(crate::schema::performance_reviews::table)
            .values(new_review)
            .get_result(conn)
    }

    pub fn find_review(
        conn: &mut PgConnection,
        review_id: uuid::Uuid,
    ) -> Result<Option<PerformanceReview>, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl::*;
        performance_reviews
            .filter(id.eq(review_id))
            .first::<PerformanceReview>(conn)
            .optional()
    }

    pub fn list_reviews(
        conn: &mut PgConnection,
        employee: Option<uuid::Uuid>,
        reviewer: Option<uuid::Uuid>,
        status_filter: Option<ReviewStatus>,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<PerformanceReview>, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl::*;
        let mut query = performance_reviews.into_boxed();

        if let Some(emp) = employee {
            query = query.filter(employee_id.eq(emp));
        }
        if let Some(rev) = reviewer {
            query = query.filter(reviewer_id.eq(rev));
        }
        if let Some(st) = status_filter {
            query = query.filter(status.eq(st));
        }

        query
            .order(created_at.desc())
            .offset((page - 1) * page_size)
            .limit(page_size)
            .load::<PerformanceReview>(conn)
    }

    pub fn count_reviews(
        conn: &mut PgConnection,
        employee: Option<uuid::Uuid>,
        reviewer: Option<uuid::Uuid>,
        status_filter: Option<ReviewStatus>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl::*;
        let mut query = performance_reviews
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(emp) = employee {
            query = query.filter(employee_id.eq(emp));
        }
        if let Some(rev) = reviewer {
            query = query.filter(reviewer_id.eq(rev));
        }
        if let Some(st) = status_filter {
            query = query.filter(status.eq(st));
        }

        query.get_result::<i64>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        review_id: uuid::Uuid,
        changes: &UpdatePerformanceReview,
    ) -> Result<PerformanceReview, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl as pr;
        diesel::update(pr::performance_reviews.filter(pr::id.eq(review_id)))
            .set((changes, pr::updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    /// Guarded status transition; returns None when the row was not in
    /// `from` (concurrent transition or caller raced a stale read).
    pub fn transition_status(
        conn: &mut PgConnection,
        review_id: uuid::Uuid,
        from: ReviewStatus,
        to: ReviewStatus,
    ) -> Result<Option<PerformanceReview>, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl as pr;
        diesel::update(
            pr::performance_reviews
                .filter(pr::id.eq(review_id))
                .filter(pr::status.eq(from)),
        )
        .set((pr::status.eq(to), pr::updated_at.eq(chrono::Utc::now())))
        .get_result::<PerformanceReview>(conn)
        .optional()
    }

    pub fn delete_review(
        conn: &mut PgConnection,
        review_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::performance_reviews::dsl::*;
        diesel::delete(performance_reviews.filter(id.eq(review_id))).execute(conn)
    }

    pub fn insert_goal(
        conn: &mut PgConnection,
        new_goal: &NewPerformanceGoal,
    ) -> Result<PerformanceGoal, diesel::result::Error> {
        diesel::insert_into(crate::schema::performance_goals::table)
            .values(new_goal)
            .get_result(conn)
    }

    pub fn list_goals(
        conn: &mut PgConnection,
        review: uuid::Uuid,
    ) -> Result<Vec<PerformanceGoal>, diesel::result::Error> {
        use crate::schema::performance_goals::dsl::*;
        performance_goals
            .filter(review_id.eq(review))
            .order(created_at.asc())
            .load::<PerformanceGoal>(conn)
    }

    pub fn delete_goals_for(
        conn: &mut PgConnection,
        review: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::performance_goals::dsl::*;
        diesel::delete(performance_goals.filter(review_id.eq(review))).execute(conn)
    }

    pub fn insert_competency(
        conn: &mut PgConnection,
        new_competency: &NewPerformanceCompetency,
    ) -> Result<PerformanceCompetency, diesel::result::Error> {
        diesel::insert_into(crate::schema::performance_competencies::table)
            .values(new_competency)
            .get_result(conn)
    }

    pub fn list_competencies(
        conn: &mut PgConnection,
        review: uuid::Uuid,
    ) -> Result<Vec<PerformanceCompetency>, diesel::result::Error> {
        use crate::schema::performance_competencies::dsl::*;
        performance_competencies
            .filter(review_id.eq(review))
            .order(created_at.asc())
            .load::<PerformanceCompetency>(conn)
    }

    pub fn delete_competencies_for(
        conn: &mut PgConnection,
        review: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::performance_competencies::dsl::*;
        diesel::delete(performance_competencies.filter(review_id.eq(review))).execute(conn)
    }
}
