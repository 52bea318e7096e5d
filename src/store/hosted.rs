//! Hosted Store
//!
//! `Store` implementation for a hosted PostgREST endpoint (Supabase and
//! friends). Each operation maps to one HTTP request against
//! `{url}/rest/v1/{table}`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Client, RequestBuilder, Response};

use super::backend::{OrderBy, Row, Store, StoreFuture};
use super::errors::{StoreError, StoreResult};

const REST_PATH: &str = "rest/v1";
const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const COUNT_EXACT: &str = "count=exact";

/// PostgREST client holding one pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HostedStore {
    client: Client,
    base_url: String,
}

impl HostedStore {
    /// Create a client for the project at `url`, authenticating with `api_key`
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| StoreError::Transport(format!("invalid api key header: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| StoreError::Transport(format!("invalid api key header: {}", e)))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/{}", url.trim_end_matches('/'), REST_PATH),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    async fn send(request: RequestBuilder) -> StoreResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::status(status.as_u16(), body))
    }

    async fn first_row(request: RequestBuilder) -> StoreResult<Option<Row>> {
        let response = Self::send(request).await?;
        let rows: Vec<Row> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}

/// Render an ordering as a PostgREST `order` parameter
fn order_param(order: &OrderBy) -> String {
    let direction = if order.descending { "desc" } else { "asc" };
    format!("{}.{}", order.column, direction)
}

/// Render an equality filter value
fn eq_param(value: &str) -> String {
    format!("eq.{}", value)
}

/// Extract the total from a `Content-Range` header (`0-9/42`, `*/0`).
///
/// An unknown total (`0-9/*`) yields `None`.
fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.rsplit_once('/')?;
    total.trim().parse().ok()
}

impl Store for HostedStore {
    fn select<'a>(&'a self, table: &'a str, order: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async move {
            let mut query = vec![("select", "*".to_string())];
            if let Some(order) = order {
                query.push(("order", order_param(order)));
            }

            let request = self.client.get(self.table_url(table)).query(&query);
            let response = Self::send(request).await?;
            let rows: Vec<Row> = response.json().await?;
            Ok(rows)
        })
    }

    fn count_eq<'a>(
        &'a self,
        table: &'a str,
        column: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Option<u64>> {
        Box::pin(async move {
            let request = self
                .client
                .head(self.table_url(table))
                .query(&[("select", "id".to_string()), (column, eq_param(value))])
                .header(PREFER, COUNT_EXACT);
            let response = Self::send(request).await?;

            Ok(response
                .headers()
                .get(CONTENT_RANGE)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_content_range))
        })
    }

    fn insert<'a>(&'a self, table: &'a str, fields: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async move {
            let request = self
                .client
                .post(self.table_url(table))
                .header(PREFER, RETURN_REPRESENTATION)
                .json(&fields);
            Self::first_row(request).await
        })
    }

    fn update_by_id<'a>(
        &'a self,
        table: &'a str,
        id: &'a str,
        fields: Row,
    ) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async move {
            let request = self
                .client
                .patch(self.table_url(table))
                .query(&[("id", eq_param(id))])
                .header(PREFER, RETURN_REPRESENTATION)
                .json(&fields);
            Self::first_row(request).await
        })
    }

    fn name(&self) -> &'static str {
        "hosted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_range_with_total() {
        assert_eq!(parse_content_range("0-9/42"), Some(42));
        assert_eq!(parse_content_range("*/0"), Some(0));
    }

    #[test]
    fn test_content_range_unknown_total() {
        assert_eq!(parse_content_range("0-9/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn test_order_param() {
        assert_eq!(order_param(&OrderBy::desc("created_at")), "created_at.desc");
        assert_eq!(order_param(&OrderBy::asc("title")), "title.asc");
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = HostedStore::new(
            "https://project.supabase.co/",
            "anon-key",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            store.table_url("orders"),
            "https://project.supabase.co/rest/v1/orders"
        );
    }

    #[test]
    fn test_rejects_unprintable_key() {
        let result = HostedStore::new("https://x.supabase.co", "bad\nkey", Duration::from_secs(1));
        assert!(matches!(result, Err(StoreError::Transport(_))));
    }
}
