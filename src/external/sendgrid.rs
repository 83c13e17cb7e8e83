use crate::config::SendGridConfig;
use crate::error::{AppError, AppResult};
use log::{error, info};
use serde_json::{json, Value};

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Clone)]
pub struct SendGridService {
    client: reqwest::Client,
    api_key: String,
    from_email: String,
    /// Operations inbox copied on claim decisions, if configured.
    pub ops_email: Option<String>,
}

impl SendGridService {
    pub fn new(config: &SendGridConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            from_email: config.from_email.clone(),
            ops_email: config.ops_email.clone(),
        }
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::ExternalApiError(
                "SendGrid is not configured".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        self.ensure_configured()?;

        let payload = build_mail_body(&self.from_email, to, subject, body);
        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            info!("Email sent to {to}: {subject}");
            Ok(())
        } else {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!("SendGrid send failed ({status}): {detail}");
            Err(AppError::ExternalApiError(format!(
                "SendGrid request failed with status {status}"
            )))
        }
    }
}

fn build_mail_body(from: &str, to: &str, subject: &str, body: &str) -> Value {
    json!({
        "personalizations": [{ "to": [{ "email": to }] }],
        "from": { "email": from },
        "subject": subject,
        "content": [{ "type": "text/plain", "value": body }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_body_carries_recipient_and_subject() {
        let body = build_mail_body("noreply@par3.test", "player@test.com", "Hi", "Welcome");
        assert_eq!(
            body["personalizations"][0]["to"][0]["email"],
            "player@test.com"
        );
        assert_eq!(body["from"]["email"], "noreply@par3.test");
        assert_eq!(body["subject"], "Hi");
        assert_eq!(body["content"][0]["value"], "Welcome");
    }

    #[tokio::test]
    async fn unconfigured_client_refuses_requests() {
        let service = SendGridService::new(&SendGridConfig::default());
        let result = service.send_email("a@b.com", "s", "b").await;
        assert!(matches!(result, Err(AppError::ExternalApiError(_))));
    }
}
