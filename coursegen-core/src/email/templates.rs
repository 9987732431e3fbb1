use crate::config::constants::defaults::API_KEY_PREVIEW_CHARS;
use crate::config::{ConfigError, EmailConfig};

/// HTML body for `--test-email`, listing the active sender, recipient and a key preview
pub fn test_email_html(config: &EmailConfig) -> Result<String, ConfigError> {
    let (from, to) = config.require_addresses()?;
    let key_preview: String = config.api_key.chars().take(API_KEY_PREVIEW_CHARS).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Test Email</title></head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: #2c3e50;">Test Email</h1>
    <p>This is a test email from your course generator.</p>
    <h2 style="color: #2c3e50;">Current configuration:</h2>
    <ul>
        <li>From: {from}</li>
        <li>To: {to}</li>
        <li>API Key: {key_preview}...</li>
    </ul>
    <p>If you receive this email, your email configuration is working correctly!</p>
</body>
</html>
"#
    ))
}
