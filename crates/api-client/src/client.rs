//! Storefront backend API client.
//!
//! This client uses the REST endpoints consumed by the cart sidebar and the
//! notification center.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use storefront_core::cart::{CartApiTrait, CartItemUpdate, CartRef, CartSnapshot};
use storefront_core::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use storefront_core::notifications::{Notification, NotificationApiTrait};
use storefront_core::StorefrontConfig;

use crate::error::{ApiClientError, Result};
use crate::types::{ApiErrorResponse, CartResponse, CartsResponse, NotificationsResponse};

#[derive(Debug, Clone)]
pub struct HttpStorefrontClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpStorefrontClient {
    /// Create a new client with the default timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The backend origin (e.g., "https://shop.example.com")
    /// * `access_token` - Bearer token of the signed-in user, if any
    pub fn new(base_url: &str, access_token: Option<String>) -> Result<Self> {
        Self::with_timeout(
            base_url,
            access_token,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(
        base_url: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        Self::with_timeout(
            &config.api_base_url,
            config.access_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create headers for an API request.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.access_token {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiClientError::auth("Invalid access token format"))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(headers)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);
        decode_body(status, &body)
    }

    async fn expect_success(response: reqwest::Response) -> Result<()> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);
        check_status(status, &body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .headers(self.headers()?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cart
    // ─────────────────────────────────────────────────────────────────────────

    /// GET /api/cart
    pub async fn get_cart(&self) -> Result<CartResponse> {
        self.get("/api/cart").await
    }

    /// GET /api/cart?cart_id={id}
    pub async fn get_cart_by_id(&self, cart_id: &str) -> Result<CartResponse> {
        self.get(&cart_by_id_path(cart_id)).await
    }

    /// GET /api/carts
    pub async fn get_carts(&self) -> Result<Vec<CartRef>> {
        let response: CartsResponse = self.get("/api/carts").await?;
        Ok(response.into_carts())
    }

    /// PATCH /api/cart/items/{itemId}
    pub async fn patch_cart_item(&self, update: &CartItemUpdate) -> Result<CartResponse> {
        let response = self
            .client
            .patch(self.url(&cart_item_path(&update.item_id)))
            .headers(self.headers()?)
            .json(update)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// DELETE /api/cart/items/{itemId}
    pub async fn delete_cart_item(&self, item_id: &str) -> Result<CartResponse> {
        let response = self
            .client
            .delete(self.url(&cart_item_path(item_id)))
            .headers(self.headers()?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// GET /api/notifications
    pub async fn get_notifications(&self) -> Result<Vec<Notification>> {
        let response: NotificationsResponse = self.get("/api/notifications").await?;
        Ok(response.into_notifications())
    }

    /// POST /api/notifications/{id}/read
    pub async fn post_notification_read(&self, notification_id: &str) -> Result<()> {
        let path = format!(
            "/api/notifications/{}/read",
            urlencoding::encode(notification_id)
        );
        let response = self
            .client
            .post(self.url(&path))
            .headers(self.headers()?)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// POST /api/notifications/read-all
    pub async fn post_notifications_read_all(&self) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/notifications/read-all"))
            .headers(self.headers()?)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[async_trait]
impl CartApiTrait for HttpStorefrontClient {
    async fn fetch_cart(&self) -> storefront_core::Result<CartSnapshot> {
        Ok(self.get_cart().await?)
    }

    async fn fetch_cart_by_id(&self, cart_id: &str) -> storefront_core::Result<CartSnapshot> {
        Ok(self.get_cart_by_id(cart_id).await?)
    }

    async fn list_carts(&self) -> storefront_core::Result<Vec<CartRef>> {
        Ok(self.get_carts().await?)
    }

    async fn update_cart_item(
        &self,
        update: CartItemUpdate,
    ) -> storefront_core::Result<CartSnapshot> {
        Ok(self.patch_cart_item(&update).await?)
    }

    async fn remove_cart_item(&self, item_id: &str) -> storefront_core::Result<CartSnapshot> {
        Ok(self.delete_cart_item(item_id).await?)
    }
}

#[async_trait]
impl NotificationApiTrait for HttpStorefrontClient {
    async fn fetch_notifications(&self) -> storefront_core::Result<Vec<Notification>> {
        Ok(self.get_notifications().await?)
    }

    async fn mark_as_read(&self, notification_id: &str) -> storefront_core::Result<()> {
        Ok(self.post_notification_read(notification_id).await?)
    }

    async fn mark_all_as_read(&self) -> storefront_core::Result<()> {
        Ok(self.post_notifications_read_all().await?)
    }
}

fn cart_by_id_path(cart_id: &str) -> String {
    format!("/api/cart?cart_id={}", urlencoding::encode(cart_id))
}

fn cart_item_path(item_id: &str) -> String {
    format!("/api/cart/items/{}", urlencoding::encode(item_id))
}

fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    // Try to parse error response
    if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(body) {
        let message = match error.code {
            Some(code) => format!("{}: {}", code, error.message),
            None => error.message,
        };
        return Err(ApiClientError::api(status, message));
    }
    Err(ApiClientError::api(
        status,
        format!("Request failed: {}", body),
    ))
}

/// Turns a status and raw body into a typed response.
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| {
        error!(
            "Failed to deserialize response. Body: {}, Error: {}",
            body, e
        );
        ApiClientError::Json(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_core::notifications::{NotificationType, RelatedEntityType};

    #[test]
    fn test_paths_are_encoded() {
        assert_eq!(cart_by_id_path("team cart"), "/api/cart?cart_id=team%20cart");
        assert_eq!(cart_item_path("a/b"), "/api/cart/items/a%2Fb");
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = HttpStorefrontClient::new("https://shop.example.com/", None).unwrap();
        assert_eq!(client.url("/api/cart"), "https://shop.example.com/api/cart");
    }

    #[test]
    fn test_headers_carry_bearer_token() {
        let client =
            HttpStorefrontClient::new("https://shop.example.com", Some("abc".to_string())).unwrap();
        let headers = client.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");

        let anonymous = HttpStorefrontClient::new("https://shop.example.com", None).unwrap();
        assert!(anonymous.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_decode_cart_body() {
        let body = r#"{
            "items": [
                {"id": "i1", "productName": "Mug", "unitPrice": 12.5, "quantity": 2},
                {"id": "i2", "productName": "Tea", "variant": "Green", "unitPrice": 4,
                 "quantity": 1, "isSavedForLater": true, "imageUrl": "/img/tea.png"}
            ],
            "summary": {"subtotal": 25, "taxAmount": 2.5, "shippingAmount": 15,
                        "discountAmount": 0, "totalAmount": 42.5, "itemCount": 2}
        }"#;
        let cart: CartResponse = decode_body(200, body).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].unit_price, dec!(12.5));
        assert!(!cart.items[0].is_saved_for_later);
        assert!(cart.items[1].is_saved_for_later);
        assert_eq!(cart.summary.total_amount, dec!(42.5));
        assert_eq!(cart.summary.item_count, 2);
    }

    #[test]
    fn test_decode_carts_in_both_shapes() {
        let bare: CartsResponse =
            decode_body(200, r#"[{"id": "c1", "name": "Main"}]"#).unwrap();
        assert_eq!(bare.into_carts()[0].name, "Main");

        let wrapped: CartsResponse =
            decode_body(200, r#"{"carts": [{"id": "c2", "name": "Office"}]}"#).unwrap();
        assert_eq!(wrapped.into_carts()[0].id, "c2");
    }

    #[test]
    fn test_decode_notifications() {
        let body = r#"{"notifications": [{
            "id": "n1", "type": "back_in_stock", "title": "Back!", "message": "Restocked",
            "isRead": false, "createdAt": "2024-06-01T10:00:00Z",
            "related": {"entityType": "product", "entityId": "p1"}
        }]}"#;
        let list = decode_body::<NotificationsResponse>(200, body)
            .unwrap()
            .into_notifications();

        assert_eq!(list[0].notification_type, NotificationType::BackInStock);
        assert_eq!(
            list[0].related.as_ref().unwrap().entity_type,
            RelatedEntityType::Product
        );
    }

    #[test]
    fn test_error_body_becomes_api_error() {
        let err = decode_body::<CartResponse>(
            409,
            r#"{"code": "OUT_OF_STOCK", "message": "Only 2 left"}"#,
        )
        .unwrap_err();
        match err {
            ApiClientError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "OUT_OF_STOCK: Only 2 left");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = check_status(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, ApiClientError::Api { status: 502, .. }));
    }

    #[test]
    fn test_malformed_success_body_is_json_error() {
        let err = decode_body::<CartResponse>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiClientError::Json(_)));
    }

    #[test]
    fn test_update_body_omits_item_id() {
        let update = CartItemUpdate::quantity("i1", 3);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"quantity": 3}));

        let update = CartItemUpdate::saved_for_later("i1", true);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"isSavedForLater": true}));
    }
}
