use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

/// A newsletter signup that passed client-side validation.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub name: String,
    pub email: String,
    pub consent: bool,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("signup rejected with status {0}")]
    Rejected(u16),
}

pub async fn send(endpoint: &str, subscription: &Subscription) -> Result<(), SubscribeError> {
    let response = Request::post(endpoint)
        .json(subscription)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubscribeError::Rejected(response.status()))
    }
}
