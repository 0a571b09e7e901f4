//! Outbound delivery of synthesized events to the local listener.

use crate::error::{MonitorError, Result};
use crate::event::EventMessage;
use tracing::{error, info};

/// HTTP client that POSTs notification envelopes to the configured listener.
///
/// Delivery is fire-and-forget from the pipeline's point of view: [`deliver`]
/// spawns the POST and returns immediately, and the outcome (success or
/// failure) is logged by the spawned task. Failures are never retried.
///
/// [`deliver`]: DeliveryClient::deliver
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    client: reqwest::Client,
    listener_url: String,
}

impl DeliveryClient {
    /// Create a client targeting the given listener URL.
    pub fn new(listener_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            listener_url: listener_url.into(),
        }
    }

    /// The listener URL this client posts to.
    pub fn listener_url(&self) -> &str {
        &self.listener_url
    }

    /// Spawn a task that POSTs `message` and logs the outcome.
    ///
    /// Returns without waiting for the request; a hung listener never blocks
    /// the watcher, it just never produces a completion log line. Because
    /// deliveries overlap, completion logs may appear out of trigger order.
    pub fn deliver(&self, message: EventMessage) {
        let client = self.clone();
        tokio::spawn(async move {
            let subject = message.body.subject.clone();
            match client.post(&message).await {
                Ok(()) => info!(%subject, "Event sent to local listener"),
                Err(err) => error!(%subject, error = %err, "Failed to send event"),
            }
        });
    }

    /// POST a single message and wait for the response.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Delivery`] on connection errors or non-success
    /// status codes.
    pub async fn post(&self, message: &EventMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.listener_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Delivery(format!(
                "listener responded with status {}",
                status
            )));
        }
        Ok(())
    }
}
