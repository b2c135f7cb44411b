//! Instruction prompt sent to the language model.

/// Embed `caption` in the fixed opener instruction.
pub fn build_prompt(caption: &str) -> String {
    format!(
        "Based on this image description: \"{caption}\"\n\n\
         Write a friendly, conversational reply of 1-2 sentences that \
         acknowledges what is in the image, then ask one open-ended question \
         that invites the person to share more about it. Keep it warm and \
         natural."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_caption() {
        let prompt = build_prompt("a dog sitting on a beach");
        assert!(prompt.starts_with("Based on this image description: \"a dog sitting on a beach\""));
        assert!(prompt.contains("1-2 sentences"));
        assert!(prompt.contains("open-ended question"));
    }
}
