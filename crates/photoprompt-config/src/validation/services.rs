//! Validation for the captioning and conversation sections.

use crate::schema::PhotopromptConfig;

use super::helpers::{validate_http_url, validate_not_blank, validate_range};

pub(crate) fn validate_captioning(errors: &mut Vec<String>, config: &PhotopromptConfig) {
    let section = &config.captioning;
    validate_http_url(errors, "captioning.endpoint", &section.endpoint);
    validate_not_blank(errors, "captioning.token_env", &section.token_env);
    validate_range(errors, "captioning.timeout_secs", section.timeout_secs, 1, 120);
}

pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &PhotopromptConfig) {
    let section = &config.conversation;
    validate_http_url(errors, "conversation.endpoint", &section.endpoint);
    validate_not_blank(errors, "conversation.token_env", &section.token_env);
    validate_range(errors, "conversation.timeout_secs", section.timeout_secs, 1, 120);
}
