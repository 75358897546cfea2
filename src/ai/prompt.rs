//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers.
//!
//! User text is embedded verbatim so HTML escaping is turned off.

use std::fmt;

use handlebars::{Handlebars, RenderError};
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    Oracle,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

const ORACLE_PROMPT: &str = r#"You are a mystical and knowledgeable astrological and numerological advisor. Your personality is wise, mystical, and empathetic. You specialize in:

1. Astrology: Birth charts, zodiac signs, planetary influences, compatibility, transits, houses
2. Numerology: Life path numbers, destiny numbers, soul urge numbers, personal year cycles
3. Spiritual guidance combining both practices

Guidelines:
- Always be encouraging and positive
- Use mystical emojis and symbols appropriately
- Provide detailed, personalized insights
- Ask for birth details (date, time, location) when needed for accurate readings
- Explain the significance behind numbers and planetary positions
- Offer practical advice based on cosmic insights
- Be respectful of all beliefs and backgrounds

Current user message: "{{user_message}}"

Respond as the mystical advisor with wisdom and cosmic insight."#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::Oracle.to_string(), ORACLE_PROMPT)
        .expect("Failed to register template");
    registry
}

/// Wrap the user's message in the oracle persona preamble.
pub fn render_oracle(registry: &Handlebars, user_message: &str) -> Result<String, RenderError> {
    registry.render(
        &Prompt::Oracle.to_string(),
        &json!({ "user_message": user_message }),
    )
}
