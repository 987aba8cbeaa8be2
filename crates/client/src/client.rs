//! Typed HTTP client for the inventory RPC endpoint.
//!
//! Queries go out as `GET /rpc/{procedure}?input=<json>`, mutations as
//! `POST /rpc/{procedure}` with a JSON body. Successful responses are
//! unwrapped from their `{ "data": ... }` envelope.

use inventory_core::item::{CreateItem, DeleteResult, Item, ItemId, UpdateItem};
use inventory_core::rpc::{HealthStatus, Procedure};
use inventory_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// HTTP client for a single inventory server.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl RpcClient {
    /// * `base_url` - Server root without the `/rpc` suffix, e.g.
    ///   `http://localhost:2022`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub async fn healthcheck(&self) -> Result<HealthStatus, ClientError> {
        self.query::<(), _>(Procedure::Healthcheck, None).await
    }

    pub async fn create_item(&self, input: &CreateItem) -> Result<Item, ClientError> {
        self.mutation(Procedure::CreateItem, input).await
    }

    pub async fn get_items(&self) -> Result<Vec<Item>, ClientError> {
        self.query::<(), _>(Procedure::GetItems, None).await
    }

    /// A missing item is `Ok(None)`, not an error.
    pub async fn get_item(&self, id: DbId) -> Result<Option<Item>, ClientError> {
        self.query(Procedure::GetItem, Some(&ItemId { id })).await
    }

    pub async fn update_item(&self, input: &UpdateItem) -> Result<Item, ClientError> {
        self.mutation(Procedure::UpdateItem, input).await
    }

    pub async fn delete_item(&self, id: DbId) -> Result<DeleteResult, ClientError> {
        self.mutation(Procedure::DeleteItem, &ItemId { id }).await
    }

    // ---- private helpers ----

    fn url(&self, procedure: Procedure) -> String {
        format!("{}/rpc/{}", self.base_url, procedure.name())
    }

    async fn query<I, O>(&self, procedure: Procedure, input: Option<&I>) -> Result<O, ClientError>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let mut request = self.client.get(self.url(procedure));
        if let Some(input) = input {
            request = request.query(&[("input", serde_json::to_string(input)?)]);
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    async fn mutation<I, O>(&self, procedure: Procedure, input: &I) -> Result<O, ClientError>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(procedure))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Unwrap the `data` envelope on success, or turn the `{ error, code }`
    /// body into [`ClientError::Rpc`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => (body.code, body.error),
                Err(_) => (
                    "UNKNOWN".to_string(),
                    String::from_utf8_lossy(&bytes).into_owned(),
                ),
            };
            return Err(ClientError::Rpc {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RpcClient::new("http://localhost:2022/");
        assert_eq!(
            client.url(Procedure::GetItems),
            "http://localhost:2022/rpc/getItems"
        );
    }

    #[test]
    fn null_data_decodes_as_none() {
        let envelope: Envelope<Option<Item>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}
