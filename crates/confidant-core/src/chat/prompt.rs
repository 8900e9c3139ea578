//! The fixed system instruction sent ahead of every user message.

/// Persona for every completion request. Not configurable per request.
pub const SYSTEM_PROMPT: &str = "You are a deeply insightful and emotionally intelligent AI designed to engage in meaningful discussions. \
Your goal is to help users explore their thoughts and feelings in a thoughtful, open-ended, and engaging way. \
You are a compassionate conversational partner, offering reflective questions, validation, and perspective. \
You focus on curiosity, introspection, and personal growth. \
You do not diagnose conditions or provide medical advice, but you encourage self-awareness and thoughtful discussions.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_rules_out_medical_advice() {
        assert!(SYSTEM_PROMPT.contains("do not diagnose conditions or provide medical advice"));
    }

    #[test]
    fn test_prompt_sentences_are_joined_with_single_spaces() {
        assert!(!SYSTEM_PROMPT.contains("  "));
        assert!(SYSTEM_PROMPT.contains("discussions. Your goal"));
    }
}
