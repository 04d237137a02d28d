//! 写操作命令
//!
//! 命令字段与请求体一一对应，缺失字段在 `validate` 阶段报错

use rust_decimal::Decimal;
use serde::Deserialize;
use stand_domain_core::Money;
use stand_errors::{AppError, AppResult};

use crate::domain::entities::{NewCustomer, Product, DEFAULT_COUNTRY};
use crate::domain::enums::{InvalidCategory, ProductCategory};
use crate::domain::value_objects::{Email, ProductSlug};

/// 创建商品命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub stock: Option<u32>,
}

impl CreateProductCommand {
    /// 校验并生成待插入的商品（slug 由名称派生）
    pub fn validate(self) -> AppResult<Product> {
        let name = non_blank(self.name);
        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(AppError::validation("Name and price are required"));
        };
        if price.is_sign_negative() && !price.is_zero() {
            return Err(AppError::validation("Price must not be negative"));
        }

        let category: ProductCategory = self
            .category
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e: InvalidCategory| AppError::validation(e.to_string()))?;

        let id = ProductSlug::from_name(&name).map_err(|e| AppError::validation(e.to_string()))?;

        Ok(Product::new(id, name, Money::new(price).rounded(), category)
            .with_description(self.description.unwrap_or_default())
            .with_stock(self.stock.unwrap_or(0)))
    }
}

/// 创建客户命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl CreateCustomerCommand {
    pub fn validate(self) -> AppResult<NewCustomer> {
        let (Some(name), Some(email)) = (non_blank(self.name), non_blank(self.email)) else {
            return Err(AppError::validation("Name and email are required"));
        };
        let email = Email::new(email).map_err(|e| AppError::validation(e.to_string()))?;

        Ok(NewCustomer {
            name,
            email,
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            zip: self.zip.unwrap_or_default(),
            country: non_blank(self.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        })
    }
}

/// 客户入驻命令，全部字段必填
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardCustomerCommand {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl OnboardCustomerCommand {
    pub fn validate(self) -> AppResult<NewCustomer> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("country", &self.country),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::validation(format!("Field '{field}' is required")));
        }

        let email = Email::new(self.email).map_err(|_| {
            AppError::validation("Invalid email format. Please provide a valid email address.")
        })?;

        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country.trim().to_string(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_cmd(name: &str, price: Option<Decimal>, category: &str) -> CreateProductCommand {
        CreateProductCommand {
            name: Some(name.to_string()),
            price,
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_product_derives_slug() {
        let product = product_cmd("Golden Banana", Some(Decimal::new(99, 2)), "specialty")
            .validate()
            .unwrap();
        assert_eq!(product.id.as_str(), "golden-banana");
        assert_eq!(product.category, ProductCategory::Specialty);
        assert_eq!(product.stock, 0);
        assert_eq!(product.image, "🍌");
    }

    #[test]
    fn test_create_product_requires_name_and_price() {
        let err = product_cmd("  ", Some(Decimal::ONE), "fresh").validate().unwrap_err();
        assert_eq!(err.message(), "Name and price are required");

        let err = product_cmd("Golden", None, "fresh").validate().unwrap_err();
        assert_eq!(err.message(), "Name and price are required");
    }

    #[test]
    fn test_create_product_rejects_unknown_category() {
        let err = product_cmd("Golden", Some(Decimal::ONE), "frozen")
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "Category must be one of: fresh, organic, specialty");

        let missing = CreateProductCommand {
            name: Some("Golden".to_string()),
            price: Some(Decimal::ONE),
            ..Default::default()
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_create_product_rounds_price() {
        let product = product_cmd("Golden", Some(Decimal::new(12345, 4)), "fresh")
            .validate()
            .unwrap();
        assert_eq!(product.price, Money::from_cents(123));
    }

    #[test]
    fn test_create_customer_defaults() {
        let draft = CreateCustomerCommand {
            name: Some("Ann Veal".to_string()),
            email: Some("Ann@Example.com".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(draft.country, "USA");
        assert_eq!(draft.email.as_str(), "ann@example.com");
        assert!(draft.phone.is_empty());
    }

    #[test]
    fn test_create_customer_requires_fields() {
        let err = CreateCustomerCommand {
            name: Some("Ann Veal".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message(), "Name and email are required");

        let err = CreateCustomerCommand {
            name: Some("Ann Veal".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_onboard_requires_every_field() {
        let cmd = OnboardCustomerCommand {
            name: "Ann Veal".to_string(),
            email: "ann@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Harbor Rd".to_string(),
            city: "Newport Beach".to_string(),
            state: "CA".to_string(),
            zip: " ".to_string(),
            country: "USA".to_string(),
        };
        let err = cmd.validate().unwrap_err();
        assert_eq!(err.message(), "Field 'zip' is required");
    }
}
