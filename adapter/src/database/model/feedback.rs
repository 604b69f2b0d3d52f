use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::feedback::{Feedback, MessType, RatingCount, RatingGrade};
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct FeedbackRow {
    pub feedback_id: i64,
    pub username: String,
    pub submitted_at: DateTime<Utc>,
    pub hostel_comment: String,
    pub hostel_rating: String,
    pub mess_comment: String,
    pub mess_type: String,
    pub mess_rating: String,
    pub bathroom_comment: String,
    pub bathroom_rating: String,
    pub other_comments: String,
}

impl TryFrom<FeedbackRow> for Feedback {
    type Error = AppError;

    fn try_from(value: FeedbackRow) -> Result<Self, Self::Error> {
        let FeedbackRow {
            feedback_id,
            username,
            submitted_at,
            hostel_comment,
            hostel_rating,
            mess_comment,
            mess_type,
            mess_rating,
            bathroom_comment,
            bathroom_rating,
            other_comments,
        } = value;
        Ok(Feedback {
            id: feedback_id,
            username,
            submitted_at,
            hostel_comment,
            hostel_rating: parse_grade(&hostel_rating)?,
            mess_comment,
            mess_type: parse_mess_type(&mess_type)?,
            mess_rating: parse_grade(&mess_rating)?,
            bathroom_comment,
            bathroom_rating: parse_grade(&bathroom_rating)?,
            other_comments,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct RatingCountRow {
    pub grade: String,
    pub count: i64,
}

impl TryFrom<RatingCountRow> for RatingCount {
    type Error = AppError;

    fn try_from(value: RatingCountRow) -> Result<Self, Self::Error> {
        Ok(RatingCount {
            grade: parse_grade(&value.grade)?,
            count: value.count,
        })
    }
}

fn parse_grade(raw: &str) -> AppResult<RatingGrade> {
    RatingGrade::from_str(raw)
        .map_err(|_| AppError::ConversionEntityError(format!("unknown rating grade: {raw}")))
}

fn parse_mess_type(raw: &str) -> AppResult<MessType> {
    MessType::from_str(raw)
        .map_err(|_| AppError::ConversionEntityError(format!("unknown mess type: {raw}")))
}
