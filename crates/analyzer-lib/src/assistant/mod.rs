//! Conversational helpers around the analysis pipeline
//!
//! These never touch the validated data pipeline: a keyword-based greeting
//! classifier, the fixed input template, and the 1-5 feedback responder.

mod feedback;
mod greeting;
mod template;

pub use feedback::feedback_response;
pub use greeting::greet;
pub use template::input_template;
