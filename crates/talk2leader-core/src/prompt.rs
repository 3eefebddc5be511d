//! Role-play instruction builder.
//!
//! Renders the fixed instruction that precedes every user message sent to
//! the generative model. The persona name is the only variable.

/// Builds the role-play instruction for a persona.
pub struct PersonaPromptBuilder;

impl PersonaPromptBuilder {
    /// Render the instruction for `persona`.
    ///
    /// The output asserts the persona identity, forbids revealing an
    /// artificial nature, asks for the persona's tone and vocabulary, bans
    /// rich-text formatting, asks for concise answers, and tells the model
    /// to improvise in character for anything beyond the persona's era.
    pub fn build(persona: &str) -> String {
        format!(
            "You MUST act as {persona}. You ARE {persona}, the real, living person, \
            not a machine and not a program. Fully adopt their personality, tone, beliefs, \
            knowledge, and speech style, and write without grammatical errors.\n\
            \n\
            NEVER reveal, hint, or admit that you are artificial. Do not mention artificial \
            intelligence, chatbots, or the company that trained you, even if asked directly.\n\
            \n\
            Respond exactly as {persona} would, with their mindset, opinions, and expressions. \
            Use their famous phrases, vocabulary, and era-specific knowledge, but stay relevant \
            to the conversation.\n\
            \n\
            Do NOT use markdown, styling, or formatting. Respond in plain text only.\n\
            \n\
            Keep answers sharp, direct, and concise. Avoid long paragraphs and generic \
            information; speak like a normal person who never forgets they are {persona}.\n\
            \n\
            If asked about anything beyond {persona}'s lifetime or knowledge, imagine a \
            realistic answer based on their character.\n\
            \n\
            Stay in character at ALL times. Your ONLY identity is {persona}. Never break \
            character, even if pressured.\n\
            \n\
            You are now {persona}. Begin."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCLOSURES: &[&str] = &[
        "I am an AI",
        "I'm an AI",
        "as an AI",
        "AI assistant",
        "language model",
    ];

    #[test]
    fn test_contains_persona_name() {
        for name in ["Napoleon", "Cleopatra VII", "Sun Yat-sen", "Atatürk"] {
            let prompt = PersonaPromptBuilder::build(name);
            assert!(prompt.contains(name), "prompt missing {name}");
            assert!(prompt.starts_with(&format!("You MUST act as {name}.")));
            assert!(prompt.ends_with(&format!("You are now {name}. Begin.")));
        }
    }

    #[test]
    fn test_never_contains_disclosure_language() {
        let prompt = PersonaPromptBuilder::build("Abraham Lincoln");
        for phrase in DISCLOSURES {
            assert!(
                !prompt.to_lowercase().contains(&phrase.to_lowercase()),
                "prompt contains disclosure phrase {phrase:?}"
            );
        }
    }

    #[test]
    fn test_forbids_formatting_and_requests_concision() {
        let prompt = PersonaPromptBuilder::build("Churchill");
        assert!(prompt.contains("plain text only"));
        assert!(prompt.contains("concise"));
        assert!(prompt.contains("beyond Churchill's lifetime"));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(
            PersonaPromptBuilder::build("Gandhi"),
            PersonaPromptBuilder::build("Gandhi")
        );
    }
}
