//! HTTP Store Client
//!
//! Functions for the document-store REST surface the widget writes through.
//! Reads arrive over the live subscription instead.

use gloo_net::http::Request;

use crate::state::global::Expense;

/// Remote collection holding the expense documents.
pub const EXPENSES_COLLECTION: &str = "expenses";
/// Field the subscription orders the collection by.
pub const ORDER_BY_FIELD: &str = "cost";

/// Default store base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Get the store base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("spendwheel_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Add a new expense document to the collection. The store assigns the id
/// and echoes the created document.
pub async fn add_expense(name: &str, cost: f64) -> Result<Expense, String> {
    #[derive(serde::Serialize)]
    struct NewExpense {
        name: String,
        cost: f64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!(
        "{}/collections/{}/documents",
        api_base, EXPENSES_COLLECTION
    ))
    .json(&NewExpense {
        name: name.to_string(),
        cost,
    })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete an expense document by id
pub async fn delete_expense(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!(
        "{}/collections/{}/documents/{}",
        api_base, EXPENSES_COLLECTION, id
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    Ok(())
}
