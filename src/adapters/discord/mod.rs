//! Discord webhook adapter
//!
//! Implements `Notifier` by posting one message per failing job.

use log::info;
use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use crate::core::models::Notification;
use crate::core::ports::Notifier;

/// Errors delivering a webhook message
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Transport failure
    #[error("failed to send webhook: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status
    #[error("webhook rejected message ({status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },
}

/// Webhook payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    /// Message text
    pub content: String,
    /// Link embeds; empty when the job has no details link
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// Link embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    /// Embed title (the job url)
    pub title: String,
    /// Embed link
    pub url: String,
}

impl From<&Notification> for WebhookMessage {
    fn from(notification: &Notification) -> Self {
        // Discord rejects embeds with an empty url
        let embeds = if notification.url.is_empty() {
            Vec::new()
        } else {
            vec![Embed {
                title: notification.url.clone(),
                url: notification.url.clone(),
            }]
        };
        Self {
            content: notification.message(),
            embeds,
        }
    }
}

/// Discord incoming webhook
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

impl DiscordWebhook {
    /// Create a notifier posting to `url`
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        Ok(Self {
            http: Client::builder().build()?,
            url: url.into(),
        })
    }

    /// Post a single message
    pub fn send(&self, message: &WebhookMessage) -> Result<(), WebhookError> {
        let response = self.http.post(&self.url).json(message).send()?;
        let status = response.status();
        let body = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(WebhookError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Sent message for {}: {} ({})", message.content, status, body);
        Ok(())
    }
}

impl Notifier for DiscordWebhook {
    fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        Ok(self.send(&WebhookMessage::from(notification))?)
    }
}
