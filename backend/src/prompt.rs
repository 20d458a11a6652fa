//! Prompt construction for GreenBot

use serde_json::Value;

/// Build the Gemini prompt for one user message
pub fn build_prompt(knowledge: &Value, user_message: &str) -> String {
    let knowledge_json =
        serde_json::to_string_pretty(knowledge).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are GreenBot 🌱, an AI plant care assistant for rooftop gardens.\n\
         \n\
         Here is plant knowledge you can use:\n\
         {knowledge_json}\n\
         \n\
         User: {user_message}\n\
         Answer in a helpful, friendly way.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_contains_persona_knowledge_and_message() {
        let knowledge = json!({"basil": {"sun": "6 hours"}});
        let prompt = build_prompt(&knowledge, "How much sun for basil?");

        assert!(prompt.starts_with("You are GreenBot 🌱"));
        assert!(prompt.contains("\"basil\""));
        assert!(prompt.contains("\"sun\": \"6 hours\""));
        assert!(prompt.contains("User: How much sun for basil?"));
        assert!(prompt.trim_end().ends_with("Answer in a helpful, friendly way."));
    }

    #[test]
    fn test_prompt_with_empty_knowledge() {
        let prompt = build_prompt(&json!({}), "hi");
        assert!(prompt.contains("you can use:\n{}\n"));
    }
}
