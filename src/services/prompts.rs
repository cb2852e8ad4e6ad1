// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt templates for the generation endpoints.
//!
//! Pure string builders. Input validation happens in the handlers before
//! these are called; the fresh-affirmation endpoint uses the caller's
//! prompt verbatim and has no template here.

/// Prompt for an encouraging sentence after a completed activity.
pub fn encouragement_prompt(completed_activity: &str) -> String {
    format!(
        "Generate a single, short, encouraging sentence for someone \
         who completed this activity: {completed_activity}."
    )
}

/// Prompt for a replacement of an affirmation the user disliked.
pub fn replacement_affirmation_prompt(disliked_affirmation: &str) -> String {
    format!(
        "Generate a new, different affirmation, between 8 and 14 words long. \
         The user disliked this one: \"{disliked_affirmation}\"."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encouragement_prompt_deterministic() {
        let expected = "Generate a single, short, encouraging sentence for someone \
                        who completed this activity: reading.";
        assert_eq!(encouragement_prompt("reading"), expected);
        assert_eq!(encouragement_prompt("reading"), encouragement_prompt("reading"));
    }

    #[test]
    fn test_replacement_prompt_contains_disliked_text_and_constraint() {
        let prompt = replacement_affirmation_prompt("I am a rock");
        assert!(prompt.contains("\"I am a rock\""));
        assert!(prompt.contains("between 8 and 14 words"));
    }
}
