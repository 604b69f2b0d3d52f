use async_trait::async_trait;
use chrono::{Duration, Utc};
use derive_new::new;
use kernel::model::{
    feedback::{
        event::CreateFeedback, DashboardSummary, Feedback, FeedbackCategory, FeedbackFilter,
        RatingCount,
    },
    list::{ListOptions, PaginatedList},
};
use kernel::repository::feedback::FeedbackRepository;
use shared::error::{AppError, AppResult};
use sqlx::{QueryBuilder, Sqlite};

use crate::database::{
    model::feedback::{FeedbackRow, RatingCountRow},
    ConnectionPool,
};

const FEEDBACK_COLUMNS: &str = "feedback_id, username, submitted_at, hostel_comment, \
     hostel_rating, mess_comment, mess_type, mess_rating, bathroom_comment, bathroom_rating, \
     other_comments";

#[derive(new)]
pub struct FeedbackRepositoryImpl {
    db: ConnectionPool,
}

impl FeedbackRepositoryImpl {
    fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &FeedbackFilter) {
        if let Some(from) = filter.submitted_from {
            qb.push(" AND submitted_at >= ").push_bind(from);
        }
        if let Some(to) = filter.submitted_to {
            qb.push(" AND submitted_at <= ").push_bind(to);
        }
        if let Some(username) = &filter.username {
            qb.push(" AND username = ").push_bind(username.clone());
        }
        if let Some(grade) = filter.hostel_rating {
            qb.push(" AND hostel_rating = ").push_bind(grade.to_string());
        }
        if let Some(grade) = filter.mess_rating {
            qb.push(" AND mess_rating = ").push_bind(grade.to_string());
        }
        if let Some(grade) = filter.bathroom_rating {
            qb.push(" AND bathroom_rating = ")
                .push_bind(grade.to_string());
        }
        if let Some(mess_type) = filter.mess_type {
            qb.push(" AND mess_type = ").push_bind(mess_type.to_string());
        }
        if let Some(needle) = &filter.contains {
            let pattern = format!("%{needle}%");
            qb.push(" AND (hostel_comment LIKE ").push_bind(pattern.clone());
            qb.push(" OR mess_comment LIKE ").push_bind(pattern.clone());
            qb.push(" OR bathroom_comment LIKE ").push_bind(pattern.clone());
            qb.push(" OR other_comments LIKE ").push_bind(pattern);
            qb.push(")");
        }
    }

    async fn count_filtered(&self, filter: &FeedbackFilter) -> AppResult<i64> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM feedback WHERE 1 = 1");
        Self::push_filters(&mut qb, filter);
        qb.build_query_scalar()
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn create(&self, event: CreateFeedback) -> AppResult<i64> {
        let submitted_at = Utc::now();
        let res = sqlx::query(
            r#"
                INSERT INTO feedback
                (username, submitted_at, hostel_comment, hostel_rating, mess_comment,
                 mess_type, mess_rating, bathroom_comment, bathroom_rating, other_comments,
                 created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.username)
        .bind(submitted_at)
        .bind(&event.hostel_comment)
        .bind(event.hostel_rating.as_ref())
        .bind(&event.mess_comment)
        .bind(event.mess_type.as_ref())
        .bind(event.mess_rating.as_ref())
        .bind(&event.bathroom_comment)
        .bind(event.bathroom_rating.as_ref())
        .bind(&event.other_comments)
        .bind(submitted_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.last_insert_rowid())
    }

    async fn find_all(
        &self,
        filter: &FeedbackFilter,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Feedback>> {
        let total = self.count_filtered(filter).await?;

        let mut qb = QueryBuilder::new(format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE 1 = 1"
        ));
        Self::push_filters(&mut qb, filter);
        qb.push(" ORDER BY submitted_at DESC, feedback_id DESC");
        qb.push(" LIMIT ").push_bind(options.limit);
        qb.push(" OFFSET ").push_bind(options.offset);

        let rows: Vec<FeedbackRow> = qb
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        let items = rows
            .into_iter()
            .map(Feedback::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PaginatedList {
            total,
            limit: options.limit,
            offset: options.offset,
            items,
        })
    }

    async fn find_all_filtered(&self, filter: &FeedbackFilter) -> AppResult<Vec<Feedback>> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE 1 = 1"
        ));
        Self::push_filters(&mut qb, filter);
        qb.push(" ORDER BY submitted_at DESC, feedback_id DESC");

        let rows: Vec<FeedbackRow> = qb
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter()
            .map(Feedback::try_from)
            .collect::<AppResult<Vec<_>>>()
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Feedback>> {
        let sql = format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback \
             ORDER BY submitted_at DESC, feedback_id DESC LIMIT ?"
        );
        let rows: Vec<FeedbackRow> = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter()
            .map(Feedback::try_from)
            .collect::<AppResult<Vec<_>>>()
    }

    async fn rating_distribution(
        &self,
        category: FeedbackCategory,
    ) -> AppResult<Vec<RatingCount>> {
        let column = match category {
            FeedbackCategory::Hostel => "hostel_rating",
            FeedbackCategory::Mess => "mess_rating",
            FeedbackCategory::Bathroom => "bathroom_rating",
        };
        let sql = format!(
            "SELECT {column} AS grade, COUNT(*) AS count FROM feedback \
             GROUP BY {column} ORDER BY {column}"
        );
        let rows: Vec<RatingCountRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter()
            .map(RatingCount::try_from)
            .collect::<AppResult<Vec<_>>>()
    }

    async fn summary(&self) -> AppResult<DashboardSummary> {
        let week_ago = Utc::now() - Duration::days(7);

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        let total_feedback: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        let users_last_week: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE created_at >= ?")
                .bind(week_ago)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        let feedback_last_week: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE submitted_at >= ?")
                .bind(week_ago)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(DashboardSummary {
            total_users,
            total_feedback,
            users_last_week,
            feedback_last_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{
        model::{
            feedback::{MessType, RatingGrade},
            user::event::RegisterUser,
        },
        repository::user::UserRepository,
    };

    async fn seed_user(db: &ConnectionPool, username: &str) -> anyhow::Result<()> {
        UserRepositoryImpl::new(db.clone())
            .register(RegisterUser {
                username: username.into(),
                password: "a sufficiently long one".into(),
                name: format!("{username} example"),
                email: format!("{username}@college.edu"),
                reg_no: "21BCE1000".into(),
                room_no: "C-3".into(),
            })
            .await?;
        Ok(())
    }

    fn submission(
        username: &str,
        hostel: RatingGrade,
        mess_type: MessType,
        mess: RatingGrade,
        mess_comment: &str,
    ) -> CreateFeedback {
        CreateFeedback {
            username: username.into(),
            hostel_comment: "rooms are ok".into(),
            hostel_rating: hostel,
            mess_comment: mess_comment.into(),
            mess_type,
            mess_rating: mess,
            bathroom_comment: "could be cleaner".into(),
            bathroom_rating: RatingGrade::C,
            other_comments: String::new(),
        }
    }

    fn everything() -> FeedbackFilter {
        FeedbackFilter::default()
    }

    fn first_page() -> ListOptions {
        ListOptions {
            limit: 20,
            offset: 0,
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_and_list(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;

        let repo = FeedbackRepositoryImpl::new(db);
        let id = repo
            .create(submission(
                "alice",
                RatingGrade::B,
                MessType::Veg,
                RatingGrade::A,
                "good sambar",
            ))
            .await?;
        assert!(id > 0);

        let page = repo.find_all(&everything(), first_page()).await?;
        assert_eq!(page.total, 1);
        let row = &page.items[0];
        assert_eq!(row.username, "alice");
        assert_eq!(row.hostel_rating, RatingGrade::B);
        assert_eq!(row.mess_type, MessType::Veg);
        assert_eq!(row.mess_rating, RatingGrade::A);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn filters_narrow_the_listing(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;
        seed_user(&db, "bob").await?;

        let repo = FeedbackRepositoryImpl::new(db);
        repo.create(submission(
            "alice",
            RatingGrade::A,
            MessType::Veg,
            RatingGrade::A,
            "good sambar",
        ))
        .await?;
        repo.create(submission(
            "bob",
            RatingGrade::C,
            MessType::NonVeg,
            RatingGrade::D,
            "chicken undercooked",
        ))
        .await?;

        let by_user = FeedbackFilter {
            username: Some("alice".into()),
            ..Default::default()
        };
        assert_eq!(repo.find_all(&by_user, first_page()).await?.total, 1);

        let by_grade = FeedbackFilter {
            hostel_rating: Some(RatingGrade::C),
            ..Default::default()
        };
        let page = repo.find_all(&by_grade, first_page()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].username, "bob");

        let by_mess_type = FeedbackFilter {
            mess_type: Some(MessType::NonVeg),
            ..Default::default()
        };
        assert_eq!(repo.find_all(&by_mess_type, first_page()).await?.total, 1);

        let by_text = FeedbackFilter {
            contains: Some("sambar".into()),
            ..Default::default()
        };
        let page = repo.find_all(&by_text, first_page()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].username, "alice");

        let in_future = FeedbackFilter {
            submitted_from: Some(Utc::now() + Duration::days(1)),
            ..Default::default()
        };
        assert_eq!(repo.find_all(&in_future, first_page()).await?.total, 0);

        let up_to_now = FeedbackFilter {
            submitted_to: Some(Utc::now()),
            ..Default::default()
        };
        assert_eq!(repo.find_all(&up_to_now, first_page()).await?.total, 2);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn pagination_reports_the_full_total(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;

        let repo = FeedbackRepositoryImpl::new(db);
        for _ in 0..3 {
            repo.create(submission(
                "alice",
                RatingGrade::B,
                MessType::Special,
                RatingGrade::B,
                "again",
            ))
            .await?;
        }

        let page = repo
            .find_all(
                &everything(),
                ListOptions {
                    limit: 2,
                    offset: 0,
                },
            )
            .await?;
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);

        let rest = repo
            .find_all(
                &everything(),
                ListOptions {
                    limit: 2,
                    offset: 2,
                },
            )
            .await?;
        assert_eq!(rest.items.len(), 1);

        assert_eq!(repo.find_all_filtered(&everything()).await?.len(), 3);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rating_distribution_groups_by_grade(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;

        let repo = FeedbackRepositoryImpl::new(db);
        for grade in [RatingGrade::A, RatingGrade::A, RatingGrade::C] {
            repo.create(submission(
                "alice",
                grade,
                MessType::Veg,
                RatingGrade::B,
                "ok",
            ))
            .await?;
        }

        let dist = repo.rating_distribution(FeedbackCategory::Hostel).await?;
        assert_eq!(
            dist,
            vec![
                RatingCount {
                    grade: RatingGrade::A,
                    count: 2
                },
                RatingCount {
                    grade: RatingGrade::C,
                    count: 1
                },
            ]
        );

        let mess = repo.rating_distribution(FeedbackCategory::Mess).await?;
        assert_eq!(
            mess,
            vec![RatingCount {
                grade: RatingGrade::B,
                count: 3
            }]
        );
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn store_rejects_values_outside_the_closed_sets(
        pool: sqlx::SqlitePool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;

        // The DTO layer cannot produce these, so exercise the CHECK
        // constraints with raw statements.
        let bad_grade = sqlx::query(
            "INSERT INTO feedback (username, submitted_at, hostel_comment, hostel_rating, \
             mess_comment, mess_type, mess_rating, bathroom_comment, bathroom_rating, \
             other_comments) VALUES (?, ?, 'x', 'F', 'x', 'Veg', 'A', 'x', 'A', '')",
        )
        .bind("alice")
        .bind(Utc::now())
        .execute(db.inner_ref())
        .await;
        assert!(bad_grade.is_err());

        let bad_mess_type = sqlx::query(
            "INSERT INTO feedback (username, submitted_at, hostel_comment, hostel_rating, \
             mess_comment, mess_type, mess_rating, bathroom_comment, bathroom_rating, \
             other_comments) VALUES (?, ?, 'x', 'A', 'x', 'Buffet', 'A', 'x', 'A', '')",
        )
        .bind("alice")
        .bind(Utc::now())
        .execute(db.inner_ref())
        .await;
        assert!(bad_mess_type.is_err());

        // Submissions never reference a username that does not exist.
        let repo = FeedbackRepositoryImpl::new(db);
        let orphan = repo
            .create(submission(
                "nobody",
                RatingGrade::A,
                MessType::Veg,
                RatingGrade::A,
                "x",
            ))
            .await;
        assert!(orphan.is_err());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn summary_counts_users_and_feedback(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        seed_user(&db, "alice").await?;
        seed_user(&db, "bob").await?;

        let repo = FeedbackRepositoryImpl::new(db);
        repo.create(submission(
            "alice",
            RatingGrade::B,
            MessType::FoodPark,
            RatingGrade::B,
            "ok",
        ))
        .await?;

        let summary = repo.summary().await?;
        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.total_feedback, 1);
        assert_eq!(summary.users_last_week, 2);
        assert_eq!(summary.feedback_last_week, 1);
        Ok(())
    }
}
