use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod event;

/// Ordinal quality grade, A (best) through E (worst).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
pub enum RatingGrade {
    A,
    B,
    C,
    D,
    E,
}

/// Meal category served by the mess.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
pub enum MessType {
    Veg,
    #[serde(rename = "Non-Veg")]
    #[strum(serialize = "Non-Veg")]
    NonVeg,
    Special,
    #[serde(rename = "Food-Park")]
    #[strum(serialize = "Food-Park")]
    FoodPark,
}

/// The three rated facilities a submission covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackCategory {
    Hostel,
    Mess,
    Bathroom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
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

/// Optional narrowing of the admin feedback views; unset fields match all.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub submitted_from: Option<DateTime<Utc>>,
    pub submitted_to: Option<DateTime<Utc>>,
    pub username: Option<String>,
    pub hostel_rating: Option<RatingGrade>,
    pub mess_rating: Option<RatingGrade>,
    pub bathroom_rating: Option<RatingGrade>,
    pub mess_type: Option<MessType>,
    pub contains: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingCount {
    pub grade: RatingGrade,
    pub count: i64,
}

/// Dashboard counters over users and feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_users: i64,
    pub total_feedback: i64,
    pub users_last_week: i64,
    pub feedback_last_week: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mess_type_uses_stored_spelling() {
        assert_eq!(MessType::NonVeg.as_ref(), "Non-Veg");
        assert_eq!(MessType::from_str("Food-Park").unwrap(), MessType::FoodPark);
        assert!(MessType::from_str("Continental").is_err());
    }

    #[test]
    fn rating_grades_are_the_closed_letter_set() {
        use strum::IntoEnumIterator;
        let letters: Vec<String> = RatingGrade::iter().map(|g| g.as_ref().to_string()).collect();
        assert_eq!(letters, ["A", "B", "C", "D", "E"]);
        assert!(RatingGrade::from_str("F").is_err());
    }
}
