use crate::{
    Payment, Reservation, ReservationId, Review, ReviewId, Space, SpaceId,
    UserId, UserIdentity, requests, responses,
};
use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the hosted backend: auth endpoints under `auth/v1`,
/// tables and remote procedures under `rest/v1`.
pub struct APIClient {
    pub address: String,
    /// Public project key, sent with every request.
    pub api_key: SecretString,
    /// Bearer token of the signed-in user, if any.
    pub access_token: Option<SecretString>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            api_key: SecretString::from(api_key.into()),
            access_token: None,
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token.map(SecretString::from);
    }

    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some()
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    /// Signed-out requests fall back to the project key as bearer.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .access_token
            .as_ref()
            .unwrap_or(&self.api_key)
            .expose_secret();
        request
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(bearer)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(path))
            .header("Prefer", "return=representation")
            .json(body);
        self.authorize(request).send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .inner_client
            .patch(self.format_url(path))
            .header("Prefer", "return=representation")
            .json(body);
        self.authorize(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.authorize(request).send().await
    }
}

/// Auth endpoints
impl APIClient {
    /// Exchange email and password for an access token. The client itself
    /// is not modified; build a new one with `with_access_token`.
    pub async fn sign_in(
        &self,
        details: &requests::SignIn,
    ) -> Result<responses::AuthSession, ClientError> {
        let response =
            self.post("auth/v1/token?grant_type=password", details).await?;
        ok_body(response).await
    }

    /// The user owning the current access token.
    pub async fn current_user(&self) -> Result<UserIdentity, ClientError> {
        let response = self.get("auth/v1/user").await?;
        ok_body(response).await
    }

    pub async fn sign_out(&self) -> Result<(), ClientError> {
        let response = self.empty_post("auth/v1/logout").await?;
        ok_empty(response).await
    }
}

/// Tables and remote procedures
impl APIClient {
    pub async fn list_spaces(&self) -> Result<Vec<Space>, ClientError> {
        let response =
            self.get("rest/v1/spaces?select=*&order=name.asc").await?;
        ok_body(response).await
    }

    pub async fn get_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<Space, ClientError> {
        let response = self
            .get(&format!("rest/v1/spaces?select=*&id=eq.{space_id}"))
            .await?;
        single_row(response).await
    }

    /// Fails with `ClientError::NotFound` when no reservation has this id.
    pub async fn get_reservation_by_id(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Reservation, ClientError> {
        let response = self
            .get(&format!(
                "rest/v1/reservations?select=*&id=eq.{reservation_id}"
            ))
            .await?;
        single_row(response).await
    }

    pub async fn list_reservations_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Reservation>, ClientError> {
        let response = self
            .get(&format!(
                "rest/v1/reservations?select=*&user_id=eq.{user_id}\
                 &order=start_date.desc"
            ))
            .await?;
        ok_body(response).await
    }

    pub async fn create_reservation(
        &self,
        details: &requests::CreateReservation,
    ) -> Result<Reservation, ClientError> {
        let response =
            self.post("rest/v1/rpc/create_reservation", details).await?;
        ok_body(response).await
    }

    /// Fails with `ClientError::NotFound` while the reservation has no
    /// payment yet.
    pub async fn get_payments_by_reservation_id(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Payment, ClientError> {
        let response = self
            .get(&format!(
                "rest/v1/payments?select=*&reservation_id=eq.{reservation_id}"
            ))
            .await?;
        single_row(response).await
    }

    pub async fn submit_payment(
        &self,
        details: &requests::SubmitPayment,
    ) -> Result<Payment, ClientError> {
        let response = self.post("rest/v1/rpc/process_payment", details).await?;
        ok_body(response).await
    }

    pub async fn list_reviews_for_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<Vec<Review>, ClientError> {
        let response = self
            .get(&format!(
                "rest/v1/reviews?select=*&space_id=eq.{space_id}\
                 &order=created_at.desc"
            ))
            .await?;
        ok_body(response).await
    }

    pub async fn create_review(
        &self,
        details: &requests::CreateReview,
    ) -> Result<Review, ClientError> {
        let response = self.post("rest/v1/reviews", details).await?;
        single_row(response).await
    }

    pub async fn update_review(
        &self,
        review_id: &ReviewId,
        details: &requests::UpdateReview,
    ) -> Result<Review, ClientError> {
        let response = self
            .patch(&format!("rest/v1/reviews?id=eq.{review_id}"), details)
            .await?;
        single_row(response).await
    }

    pub async fn delete_review(
        &self,
        review_id: &ReviewId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("rest/v1/reviews?id=eq.{review_id}"))
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// A single-row lookup matched nothing.
    #[error("Not found")]
    NotFound,
    #[error("Please sign in again.")]
    Unauthorized,
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
        status => Err(ClientError::APIError(status, response.text().await?)),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

/// Table reads always return an array; take its first row.
pub async fn single_row<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let rows: Vec<T> = ok_body(response).await?;
    rows.into_iter().next().ok_or(ClientError::NotFound)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    check_status(response).await?;
    Ok(())
}
