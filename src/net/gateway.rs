//! Injected gateway collaborators for the orderable admin screens.
//!
//! DESIGN
//! ======
//! The category and sub-category management screens share one generic
//! controller; the only thing that differs between them is the endpoint
//! family. `OrderableGateway` captures that family (list, status toggle,
//! append-only create, bulk order update) so each screen is a thin
//! instantiation over a concrete gateway value.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use super::error::ApiError;
use super::types::{Category, ListFilter, ListPage, OrderEntry, SubCategory};
use crate::state::orderable::Orderable;

#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// The four backend operations behind one orderable admin list.
#[allow(async_fn_in_trait)]
pub trait OrderableGateway: Clone + Send + Sync + 'static {
    /// Record type managed by this gateway.
    type Item: Orderable + Clone + PartialEq + Send + Sync + 'static;

    /// Fetch the current list, filtered by search term and status.
    async fn list(&self, filter: &ListFilter) -> Result<ListPage<Self::Item>, ApiError>;

    /// Flip one record's active flag.
    async fn toggle_status(&self, id: &str) -> Result<(), ApiError>;

    /// Create a record appended at `order_index` (`max(existing) + 1`,
    /// computed by the caller; never inserted mid-list).
    async fn create(&self, name: &str, order_index: u32) -> Result<Self::Item, ApiError>;

    /// Persist the full new order as one bulk request. The payload always
    /// covers the whole list so other viewers never observe a partial
    /// order. No version check: last writer wins.
    async fn update_order(&self, orders: Vec<OrderEntry>) -> Result<(), ApiError>;
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct CreatedResponse<T> {
    item: T,
}

#[cfg(any(test, feature = "hydrate"))]
const CATEGORIES_ENDPOINT: &str = "/api/admin/categories";

#[cfg(any(test, feature = "hydrate"))]
fn category_status_endpoint(id: &str) -> String {
    format!("{CATEGORIES_ENDPOINT}/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn subcategories_endpoint(category_id: &str) -> String {
    format!("{CATEGORIES_ENDPOINT}/{category_id}/subcategories")
}

#[cfg(any(test, feature = "hydrate"))]
fn subcategory_status_endpoint(category_id: &str, id: &str) -> String {
    format!("{}/{id}/status", subcategories_endpoint(category_id))
}

/// Gateway for the top-level category list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryGateway;

impl OrderableGateway for CategoryGateway {
    type Item = Category;

    async fn list(&self, filter: &ListFilter) -> Result<ListPage<Category>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::api::get_json(&format!("{CATEGORIES_ENDPOINT}{}", filter.to_query())).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
            Err(ApiError::ServerOnly)
        }
    }

    async fn toggle_status(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::api::put_ack(&category_status_endpoint(id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::ServerOnly)
        }
    }

    async fn create(&self, name: &str, order_index: u32) -> Result<Category, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "name": name, "orderIndex": order_index });
            let created: CreatedResponse<Category> =
                super::api::post_json(CATEGORIES_ENDPOINT, &payload).await?;
            Ok(created.item)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, order_index);
            Err(ApiError::ServerOnly)
        }
    }

    async fn update_order(&self, orders: Vec<OrderEntry>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = UpdateOrderRequest { orders };
            super::api::post_json_ack(&format!("{CATEGORIES_ENDPOINT}/order"), &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = orders;
            Err(ApiError::ServerOnly)
        }
    }
}

/// Gateway for the sub-category list of one parent category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategoryGateway {
    category_id: String,
}

impl SubcategoryGateway {
    #[must_use]
    pub fn new(category_id: String) -> Self {
        Self { category_id }
    }
}

impl OrderableGateway for SubcategoryGateway {
    type Item = SubCategory;

    async fn list(&self, filter: &ListFilter) -> Result<ListPage<SubCategory>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!(
                "{}{}",
                subcategories_endpoint(&self.category_id),
                filter.to_query()
            );
            super::api::get_json(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
            Err(ApiError::ServerOnly)
        }
    }

    async fn toggle_status(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::api::put_ack(&subcategory_status_endpoint(&self.category_id, id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::ServerOnly)
        }
    }

    async fn create(&self, name: &str, order_index: u32) -> Result<SubCategory, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "name": name, "orderIndex": order_index });
            let created: CreatedResponse<SubCategory> =
                super::api::post_json(&subcategories_endpoint(&self.category_id), &payload).await?;
            Ok(created.item)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, order_index);
            Err(ApiError::ServerOnly)
        }
    }

    async fn update_order(&self, orders: Vec<OrderEntry>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = UpdateOrderRequest { orders };
            let url = format!("{}/order", subcategories_endpoint(&self.category_id));
            super::api::post_json_ack(&url, &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = orders;
            Err(ApiError::ServerOnly)
        }
    }
}

/// Fetch the active category list for public-facing filters (catalog page,
/// wizard category picker) from `/api/categories`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_public_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json("/api/categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::ServerOnly)
    }
}
