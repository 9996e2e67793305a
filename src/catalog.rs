//! Catalog models shared with the presentation layer.

use crate::currency::format_currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use thiserror::Error;

/// Parse error for [`Status`] and [`UserRole`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {input}")]
pub struct ParseCatalogError {
    pub kind: &'static str,
    pub input: String,
}

/// Lifecycle status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Pending => "pending",
        }
    }
}

impl FromStr for Status {
    type Err = ParseCatalogError;

    /// Exact lowercase match only.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "pending" => Ok(Status::Pending),
            _ => Err(ParseCatalogError {
                kind: "status",
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

impl FromStr for UserRole {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            _ => Err(ParseCatalogError {
                kind: "role",
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The price rendered in `currency`.
    pub fn display_price(&self, currency: &str) -> String {
        format_currency(self.price, currency)
    }
}

/// Contact details attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A placed order.
///
/// `total` is stored as submitted; it is not recomputed from `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub products: Vec<Product>,
    pub total: f64,
    pub customer_info: CustomerInfo,
    pub created_at: SystemTime,
}

impl Order {
    /// The stored total rendered in `currency`.
    pub fn display_total(&self, currency: &str) -> String {
        format_currency(self.total, currency)
    }

    /// Sum of the product prices, for checking against `total`.
    pub fn products_total(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }
}

/// Envelope returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response without a message.
    pub fn ok(data: T) -> Self {
        ApiResponse {
            data,
            success: true,
            message: None,
        }
    }

    /// A failed response carrying `message`.
    pub fn failed(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            data,
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            status: Status::Active,
            tags: vec!["electronics".to_string(), "computer".to_string()],
        }
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [Status::Active, Status::Inactive, Status::Pending] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_exact() {
        assert!("Active".parse::<Status>().is_err());
        assert!(" active".parse::<Status>().is_err());
    }

    #[test]
    fn test_user_role_values() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!("guest".parse::<UserRole>().unwrap(), UserRole::Guest);
        let err = "root".parse::<UserRole>().unwrap_err();
        assert_eq!(err.to_string(), "invalid role: root");
    }

    #[test]
    fn test_product_display_price() {
        assert_eq!(laptop().display_price("USD"), "USD 999.99");
    }

    #[test]
    fn test_product_deserializes_without_tags() {
        let csv = "id,name,price,status\n7,Mouse,19.5,pending\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let product: Product = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.status, Status::Pending);
        assert!(product.tags.is_empty());
        assert_eq!(product.display_price("EUR"), "EUR 19.50");
    }

    #[test]
    fn test_order_totals() {
        let mouse = Product {
            id: 2,
            name: "Mouse".to_string(),
            price: 20.01,
            status: Status::Active,
            tags: Vec::new(),
        };
        let order = Order {
            id: 10,
            products: vec![laptop(), mouse],
            total: 1020.0,
            customer_info: CustomerInfo {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: None,
            },
            created_at: SystemTime::UNIX_EPOCH,
        };

        assert_eq!(order.display_total("USD"), "USD 1020.00");
        assert_eq!(format_currency(order.products_total(), "USD"), "USD 1020.00");
        assert!(order.customer_info.phone.is_none());
    }

    #[test]
    fn test_customer_info_reads_optional_phone() {
        let csv = "name,email,phone
Bob,bob@example.com,
Eve,eve@example.com,555-0100
";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let customers: Vec<CustomerInfo> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(customers[0].phone, None);
        assert_eq!(customers[1].phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_api_response_constructors() {
        let ok = ApiResponse::ok(laptop());
        assert!(ok.success);
        assert!(ok.message.is_none());

        let failed = ApiResponse::failed((), "not found");
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("not found"));
    }
}
