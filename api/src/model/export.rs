use kernel::model::feedback::Feedback;
use shared::error::{AppError, AppResult};

const HEADER: [&str; 10] = [
    "username",
    "submitted_at",
    "hostel_comment",
    "hostel_rating",
    "mess_comment",
    "mess_type",
    "mess_rating",
    "bathroom_comment",
    "bathroom_rating",
    "other_comments",
];

/// Renders the filtered feedback view as delimited text: a header row plus
/// one row per record, columns matching the listing.
pub fn render_feedback_csv(rows: &[Feedback]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record(&[
                row.username.clone(),
                row.submitted_at.to_rfc3339(),
                row.hostel_comment.clone(),
                row.hostel_rating.to_string(),
                row.mess_comment.clone(),
                row.mess_type.to_string(),
                row.mess_rating.to_string(),
                row.bathroom_comment.clone(),
                row.bathroom_rating.to_string(),
                row.other_comments.clone(),
            ])
            .map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::ConversionEntityError(e.to_string()))
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::ConversionEntityError(e.to_string())
}
