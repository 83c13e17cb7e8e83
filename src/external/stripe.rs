use crate::config::StripeConfig;
use crate::error::{AppError, AppResult};
use log::{error, info};
use serde::Deserialize;
use std::collections::BTreeMap;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Thin client over the Stripe REST API. Requests are form-encoded per
/// Stripe's wire format.
#[derive(Clone)]
pub struct StripeService {
    client: reqwest::Client,
    secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

impl StripeService {
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
        }
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.secret_key.is_empty() {
            return Err(AppError::ExternalApiError(
                "Stripe is not configured".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create_payment_intent(
        &self,
        amount_cents: i64,
        currency: &str,
        metadata: &BTreeMap<String, String>,
    ) -> AppResult<PaymentIntent> {
        self.ensure_configured()?;

        let amount = amount_cents.to_string();
        let mut form: Vec<(String, String)> = vec![
            ("amount".to_string(), amount),
            ("currency".to_string(), currency.to_string()),
            (
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ),
            (
                "automatic_payment_methods[allow_redirects]".to_string(),
                "never".to_string(),
            ),
        ];
        form.extend(flatten_metadata(metadata));

        let response = self
            .client
            .post(format!("{STRIPE_API_BASE}/payment_intents"))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await?;

        if response.status().is_success() {
            let intent: PaymentIntent = response.json().await?;
            info!("Stripe payment intent created: {}", intent.id);
            Ok(intent)
        } else {
            let status = response.status();
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| format!("Stripe request failed with status {status}"));
            error!("Stripe payment intent failed: {message}");
            Err(AppError::ExternalApiError(message))
        }
    }
}

/// Expands metadata entries into Stripe's `metadata[key]=value` form fields.
fn flatten_metadata(metadata: &BTreeMap<String, String>) -> Vec<(String, String)> {
    metadata
        .iter()
        .map(|(k, v)| (format!("metadata[{k}]"), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_metadata_into_bracketed_keys() {
        let mut metadata = BTreeMap::new();
        metadata.insert("claimId".to_string(), "42".to_string());
        metadata.insert("kind".to_string(), "entry".to_string());

        let fields = flatten_metadata(&metadata);
        assert_eq!(
            fields,
            vec![
                ("metadata[claimId]".to_string(), "42".to_string()),
                ("metadata[kind]".to_string(), "entry".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn unconfigured_client_refuses_requests() {
        let service = StripeService::new(&StripeConfig::default());
        let result = service
            .create_payment_intent(800, "usd", &BTreeMap::new())
            .await;
        assert!(matches!(result, Err(AppError::ExternalApiError(_))));
    }
}
