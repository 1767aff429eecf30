//! Greeting and tone classification over free user text
//!
//! An explicit ordered rule list, evaluated top to bottom with first match
//! winning. State-free; the analysis pipeline never sees this text.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)my name is (\w+)|I am (\w+)|I'm (\w+)").expect("name pattern is valid")
});

const URGENCY_KEYWORDS: [&str; 3] = ["urgent", "asap", "emergency"];
const HAPPY_KEYWORDS: [&str; 4] = ["happy", "excited", "joyful", "great"];
const SAD_KEYWORDS: [&str; 3] = ["sad", "down", "unhappy"];
const ANGRY_KEYWORDS: [&str; 3] = ["angry", "mad", "frustrated"];

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

/// Pick the greeting matching the user's message
pub fn greet(message: &str) -> String {
    let normalized = message.to_lowercase();

    if contains_any(&normalized, &URGENCY_KEYWORDS) {
        return "CloudResource-JSON-AI here! Let's quickly optimize your server resources."
            .to_string();
    }

    if let Some(captures) = NAME_PATTERN.captures(message) {
        // The pattern has one capture group per phrasing; exactly one matches
        let name = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|group| group.as_str())
            .next()
            .unwrap_or_default();
        return format!(
            "Hello, {name}! I'm CloudResource-JSON-AI, here to assist with your resource allocation."
        );
    }

    if contains_any(&normalized, &HAPPY_KEYWORDS) {
        return "Hello! It's great to see your positive energy. I'm here to help optimize your server resources!".to_string();
    }
    if contains_any(&normalized, &SAD_KEYWORDS) {
        return "Hello. I'm sorry you're feeling down. I'm here to help optimize your server resources.".to_string();
    }
    if contains_any(&normalized, &ANGRY_KEYWORDS) {
        return "Hello. I understand you're frustrated. Let's work together to optimize your server resources.".to_string();
    }

    "Greetings! I am CloudResource-JSON-AI, your cloud resource optimization assistant. Please provide your server resource data in JSON format to begin.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_wins_over_tone() {
        let response = greet("I'm happy but this is URGENT");
        assert!(response.contains("quickly optimize"));
    }

    #[test]
    fn test_name_extraction() {
        assert!(greet("Hi, my name is Dana").contains("Hello, Dana!"));
        assert!(greet("I am Riley and I need help").contains("Hello, Riley!"));
        assert!(greet("I'm Sam").contains("Hello, Sam!"));
    }

    #[test]
    fn test_tone_rules() {
        assert!(greet("feeling great today").contains("positive energy"));
        assert!(greet("a bit sad honestly").contains("feeling down"));
        assert!(greet("so frustrated right now").contains("you're frustrated"));
    }

    #[test]
    fn test_default_greeting() {
        let response = greet("hello there");
        assert!(response.starts_with("Greetings!"));
    }
}
