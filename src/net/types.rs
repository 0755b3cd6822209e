//! Wire DTOs for the client/backend HTTP boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips
//! stay lossless. Ids are opaque strings assigned by the backend; the
//! client never parses or fabricates them (client-generated ids exist only
//! for unsaved wizard lessons).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One page of a list endpoint response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Records for the requested page, in server-assigned order.
    pub items: Vec<T>,
    /// Total record count across all pages.
    pub total_elements: u64,
}

/// One `(id, order_index)` pair of the bulk order update payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntry {
    pub id: String,
    pub order_index: u32,
}

/// Bulk order update request body. Always carries the full current list,
/// never a partial one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub orders: Vec<OrderEntry>,
}

/// Search/status filter forwarded to admin list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive name search, if any.
    pub search: Option<String>,
    /// Restrict to active records when `Some(true)`.
    pub active_only: Option<bool>,
}

impl ListFilter {
    /// Render as a query string (including the leading `?`), or an empty
    /// string when no filter is set.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                params.push(format!("search={}", encode_component(search)));
            }
        }
        if self.active_only == Some(true) {
            params.push("status=active".to_owned());
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Percent-encode a query-string value. Covers the reserved characters a
/// search term can realistically contain; unreserved ASCII passes through.
#[must_use]
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// A course category as managed in the admin console and shown in catalog
/// filters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// 1-based display position within the category list.
    pub order_index: u32,
    pub is_active: bool,
    /// Number of published courses under this category.
    #[serde(default)]
    pub course_count: u64,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
}

/// A sub-category scoped to a parent category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub category_id: String,
    /// Parent category display name, denormalized for the admin table.
    #[serde(default)]
    pub category_name: String,
    pub name: String,
    /// 1-based display position within the parent category.
    pub order_index: u32,
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
}

/// A course as listed in the catalog grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category_name: String,
    /// Price in the marketplace currency's minor unit.
    pub price_cents: i64,
    pub cover_url: Option<String>,
    pub average_rating: Option<f64>,
}

/// Full course detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub category_name: String,
    pub instructor_name: String,
    pub price_cents: i64,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    /// ISO 8601 publication timestamp.
    pub created_at: Option<String>,
}

/// A published lesson within a course, in curriculum order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration_seconds: Option<u64>,
}

/// Billing details collected by the checkout form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub full_name: String,
    pub email: String,
    pub country: String,
}

/// Checkout request: the cart contents plus billing details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub course_ids: Vec<String>,
    pub billing: BillingDetails,
}

/// Checkout response. When the payment provider requires a hosted page,
/// `redirect_url` carries it and the client follows the redirect; the
/// provider later sends the user back to `/payment/result`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_ref: String,
    pub redirect_url: Option<String>,
}

/// Payment outcome as confirmed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Order status as returned by the payment-status endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub order_ref: String,
    pub status: PaymentStatus,
    pub amount_cents: i64,
}

/// Role attached to an authenticated user session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl UserRole {
    /// Whether this role may open the instructor/admin console.
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Instructor | Self::Admin)
    }
}

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Extended student profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// ISO 8601 date of account creation, if available.
    pub member_since: Option<String>,
    /// Number of courses the student is enrolled in.
    #[serde(default)]
    pub enrolled_count: u64,
}

/// Course creation request posted by the upload wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub category_id: String,
    pub subcategory_id: Option<String>,
    pub price_cents: i64,
    /// Validated cover file name; the binary upload happens out of band.
    pub cover_name: Option<String>,
    pub lessons: Vec<NewLesson>,
}

/// A lesson row of a course creation request, in curriculum order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    /// Validated video file name; the binary upload happens out of band.
    pub video_name: Option<String>,
    /// 1-based curriculum position.
    pub order_index: u32,
}
