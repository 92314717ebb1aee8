//! Domain transfer objects served by the demo endpoints

use serde::{Deserialize, Serialize};

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub user_id: u64,
    pub total: f64,
    pub status: String,
}

impl Order {
    pub fn new(id: u32, user_id: u64, total: f64, status: &str) -> Self {
        Self {
            id,
            user_id,
            total,
            status: status.to_string(),
        }
    }
}

/// A shipment fulfilling an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: u32,
    pub carrier: String,
    pub tracking_number: String,
    pub status: String,
}

impl Shipment {
    pub fn new(id: u32, carrier: &str, tracking_number: &str, status: &str) -> Self {
        Self {
            id,
            carrier: carrier.to_string(),
            tracking_number: tracking_number.to_string(),
            status: status.to_string(),
        }
    }
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: u16,
}

/// A book author, embeddable under a book resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_genre: Option<String>,
}
