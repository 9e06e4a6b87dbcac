//! reqwest-backed implementation of [`BookstoreApi`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{
    ApiError, ApiResult, BOOKS_PATH, BookstoreApi, MATERIALS_PATH, PAGE_OPTIONS_PATH,
};
use crate::domain::book::{BookCreationRequest, BookSummary};
use crate::domain::material::RawMaterial;
use crate::domain::page_option::PageOption;
use crate::domain::types::TypeConstraintError;
use crate::dto::api::{
    ApiErrorBody, BookSummaryDto, NewBookPayload, PageOptionDto, RawMaterialDto,
};
use crate::models::config::ApiConfig;

/// Bookstore API client bound to one origin.
#[derive(Clone, Debug)]
pub struct HttpBookstoreApi {
    client: Client,
    config: ApiConfig,
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Connection(err.to_string())
    }
}

/// Decodes a JSON array body item by item into domain values.
fn decode_collection<D, T>(body: &[u8]) -> ApiResult<Vec<T>>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = TypeConstraintError>,
{
    let value: Value =
        serde_json::from_slice(body).map_err(|err| ApiError::Shape(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ApiError::Shape("expected a JSON array".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let dto: D = serde_json::from_value(item)
                .map_err(|err| ApiError::Shape(format!("item {index}: {err}")))?;
            T::try_from(dto).map_err(|err| ApiError::Shape(format!("item {index}: {err}")))
        })
        .collect()
}

impl HttpBookstoreApi {
    /// Builds a client whose every request is bounded by `config.timeout`.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Connection(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn fetch_collection<D, T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<Vec<T>>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = TypeConstraintError>,
    {
        let response = self
            .client
            .get(self.config.url(path))
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        decode_collection::<D, T>(&body)
    }
}

#[async_trait]
impl BookstoreApi for HttpBookstoreApi {
    async fn list_raw_materials(&self) -> ApiResult<Vec<RawMaterial>> {
        self.fetch_collection::<RawMaterialDto, RawMaterial>(MATERIALS_PATH, &[])
            .await
    }

    async fn list_page_options(&self) -> ApiResult<Vec<PageOption>> {
        self.fetch_collection::<PageOptionDto, PageOption>(PAGE_OPTIONS_PATH, &[])
            .await
    }

    async fn create_book(&self, request: &BookCreationRequest) -> ApiResult<()> {
        let payload = NewBookPayload::from(request);

        let response = self
            .client
            .post(self.config.url(BOOKS_PATH))
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // An unreadable error body is the same as an empty one.
        let body = response.bytes().await.unwrap_or_default();
        let detail = ApiErrorBody::parse(&body).detail_message();

        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn list_books(&self, search: Option<String>) -> ApiResult<Vec<BookSummary>> {
        let term = search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        match term {
            Some(term) => {
                self.fetch_collection::<BookSummaryDto, BookSummary>(BOOKS_PATH, &[("q", term)])
                    .await
            }
            None => {
                self.fetch_collection::<BookSummaryDto, BookSummary>(BOOKS_PATH, &[])
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_array_bodies() {
        let result = decode_collection::<RawMaterialDto, RawMaterial>(br#"{"items": []}"#);
        assert_eq!(
            result,
            Err(ApiError::Shape("expected a JSON array".to_string()))
        );

        let result = decode_collection::<RawMaterialDto, RawMaterial>(b"not json");
        assert!(matches!(result, Err(ApiError::Shape(_))));
    }

    #[test]
    fn decode_rejects_items_of_the_wrong_shape() {
        let result =
            decode_collection::<RawMaterialDto, RawMaterial>(br#"[{"id": 1, "name": "Ink"}, 7]"#);

        assert!(matches!(result, Err(ApiError::Shape(message)) if message.starts_with("item 1")));
    }

    #[test]
    fn decode_preserves_server_order() {
        let materials = decode_collection::<RawMaterialDto, RawMaterial>(
            br#"[{"id": 9, "name": "Ink"}, {"id": 2, "name": "Paper"}]"#,
        )
        .unwrap();

        let ids: Vec<i32> = materials.iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![9, 2]);
    }
}
