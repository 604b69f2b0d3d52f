use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    feedback::{event::CreateFeedback, Feedback, MessType, RatingGrade},
    list::PaginatedList,
};
use serde::{Deserialize, Serialize};

/// The form only offers the closed rating and mess-type sets, so the enums
/// do the validating; comments may be left empty as on the original form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[serde(default)]
    pub hostel_comment: String,
    pub hostel_rating: RatingGrade,
    #[serde(default)]
    pub mess_comment: String,
    pub mess_type: MessType,
    pub mess_rating: RatingGrade,
    #[serde(default)]
    pub bathroom_comment: String,
    pub bathroom_rating: RatingGrade,
    #[serde(default)]
    pub other_comments: String,
}

#[derive(new)]
pub struct CreateFeedbackRequestWithUsername(String, CreateFeedbackRequest);

impl From<CreateFeedbackRequestWithUsername> for CreateFeedback {
    fn from(value: CreateFeedbackRequestWithUsername) -> Self {
        let CreateFeedbackRequestWithUsername(
            username,
            CreateFeedbackRequest {
                hostel_comment,
                hostel_rating,
                mess_comment,
                mess_type,
                mess_rating,
                bathroom_comment,
                bathroom_rating,
                other_comments,
            },
        ) = value;
        Self {
            username,
            hostel_comment,
            hostel_rating,
            mess_comment,
            mess_type,
            mess_rating,
            bathroom_comment,
            bathroom_rating,
            other_comments,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFeedbackResponse {
    pub id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: i64,
    pub username: String,
    pub submitted_at: DateTime<Utc>,
    pub hostel_comment: String,
    pub hostel_rating: RatingGrade,
    pub mess_comment: String,
    pub mess_type: MessType,
    pub mess_rating: RatingGrade,
    pub bathroom_comment: String,
    pub bathroom_rating: RatingGrade,
    pub other_comments: String,
}

impl From<Feedback> for FeedbackResponse {
    fn from(value: Feedback) -> Self {
        let Feedback {
            id,
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
        Self {
            id,
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
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedFeedbackResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<FeedbackResponse>,
}

impl From<PaginatedList<Feedback>> for PaginatedFeedbackResponse {
    fn from(value: PaginatedList<Feedback>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(FeedbackResponse::from).collect(),
        }
    }
}
