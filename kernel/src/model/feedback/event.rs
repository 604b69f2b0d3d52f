use crate::model::feedback::{MessType, RatingGrade};

#[derive(Debug)]
pub struct CreateFeedback {
    pub username: String,
    pub hostel_comment: String,
    pub hostel_rating: RatingGrade,
    pub mess_comment: String,
    pub mess_type: MessType,
    pub mess_rating: RatingGrade,
    pub bathroom_comment: String,
    pub bathroom_rating: RatingGrade,
    pub other_comments: String,
}
