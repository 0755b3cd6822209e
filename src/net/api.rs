//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::ServerOnly` (or `None`)
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/`Option` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration. Auth lookups
//! return `Option` (absence is a normal state); everything else returns
//! `Result<_, ApiError>`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    CheckoutReceipt, CheckoutRequest, Course, CourseSummary, ListPage, NewCourseRequest,
    OrderStatus, User, UserProfile,
};

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(course_id: &str) -> String {
    format!("/api/courses/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_status_endpoint(order_ref: &str) -> String {
    format!("/api/orders/{order_ref}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/profile")
}

/// GET a JSON body, mapping non-2xx statuses and decode failures.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(ApiError::from)
}

/// POST a JSON body and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(ApiError::from)
}

/// POST a JSON body where only the status matters.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json_ack<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// PUT with no body where only the status matters.
#[cfg(feature = "hydrate")]
pub(crate) async fn put_ack(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::put(url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// Fetch one catalog page from `/api/courses`. `query` is a pre-rendered
/// query string (including the leading `?`) or empty.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_courses(query: &str) -> Result<ListPage<CourseSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/courses{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::ServerOnly)
    }
}

/// Fetch full course detail from `/api/courses/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_course(course_id: &str) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&course_endpoint(course_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err(ApiError::ServerOnly)
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure or rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json("/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::ServerOnly)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`. The local
/// session is cleared either way; a failed request only means the server
/// cookie outlives it.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
        {
            log::warn!("logout request failed: {err}");
        }
    }
}

/// Fetch a student's profile from `/api/users/{user_id}/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_profile(user_id: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&profile_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::ServerOnly)
    }
}

/// Update the student's display name via `PUT /api/users/{user_id}/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn update_profile(user_id: &str, name: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = gloo_net::http::Request::put(&profile_endpoint(user_id))
            .json(&payload)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<UserProfile>().await.map_err(ApiError::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, name);
        Err(ApiError::ServerOnly)
    }
}

/// Submit the cart for payment via `POST /api/checkout`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn post_checkout(request: &CheckoutRequest) -> Result<CheckoutReceipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/checkout", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::ServerOnly)
    }
}

/// Confirm an order's payment outcome from `/api/orders/{ref}/status`.
/// Used by the payment-callback page instead of trusting redirect query
/// parameters.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_order_status(order_ref: &str) -> Result<OrderStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&order_status_endpoint(order_ref)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order_ref;
        Err(ApiError::ServerOnly)
    }
}

/// Submit the course-upload wizard via `POST /api/admin/courses`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn create_course(request: &NewCourseRequest) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/admin/courses", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::ServerOnly)
    }
}
