//! Default config file content.

pub(super) fn default_config_toml() -> &'static str {
    r##"# photoprompt configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[captioning]
# endpoint = "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-large"
# token_env = "HF_API_TOKEN"     # env var holding the bearer token
# timeout_secs = 20              # 1-120

[conversation]
# endpoint = "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
# token_env = "GEMINI_API_KEY"   # env var holding the API key
# timeout_secs = 20              # 1-120

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
"##
}
