//! Feedback responder for the 1-5 analysis rating

/// Map a rating to its fixed acknowledgement, with a fallback for anything
/// outside 1-5
pub fn feedback_response(rating: i64) -> &'static str {
    match rating {
        1 => "We are very sorry that the analysis did not meet your expectations. Could you please provide specific feedback on what went wrong?",
        2 => "Thank you for your feedback. We appreciate your input and would love to know more details on how we can improve.",
        3 => "Thank you for your feedback. We are committed to continuous improvement. Could you share what aspects need enhancement?",
        4 => "Thank you for your positive feedback! We're glad the analysis was helpful.",
        5 => "Thank you for your excellent feedback! We are thrilled to have met your expectations and appreciate your input.",
        _ => "Thank you for your feedback. Please rate on a scale of 1-5 for a more specific response.",
    }
}
