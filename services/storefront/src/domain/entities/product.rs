//! 商品实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stand_domain_core::{Entity, Money};

use crate::domain::enums::ProductCategory;
use crate::domain::value_objects::ProductSlug;

/// 新建商品的默认图标
pub const DEFAULT_PRODUCT_IMAGE: &str = "🍌";

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductSlug,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: ProductCategory,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: ProductSlug,
        name: impl Into<String>,
        price: Money,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: DEFAULT_PRODUCT_IMAGE.to_string(),
            category,
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }
}

impl Entity for Product {
    type Id = ProductSlug;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 商品过滤条件
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let price = product.price.amount();
        self.category.is_none_or(|c| product.category == c)
            && self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana(price_cents: i64, category: ProductCategory) -> Product {
        Product::new(
            ProductSlug::from_name("Test Banana").unwrap(),
            "Test Banana",
            Money::from_cents(price_cents),
            category,
        )
    }

    #[test]
    fn test_new_product_defaults() {
        let product = banana(50, ProductCategory::Fresh);
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
        assert_eq!(product.stock, 0);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_filter_by_category_and_price() {
        let filter = ProductFilter {
            category: Some(ProductCategory::Organic),
            min_price: Some(Decimal::new(40, 2)),
            max_price: Some(Decimal::new(80, 2)),
        };

        assert!(filter.matches(&banana(45, ProductCategory::Organic)));
        assert!(filter.matches(&banana(80, ProductCategory::Organic)));
        assert!(!filter.matches(&banana(81, ProductCategory::Organic)));
        assert!(!filter.matches(&banana(39, ProductCategory::Organic)));
        assert!(!filter.matches(&banana(45, ProductCategory::Fresh)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&banana(1, ProductCategory::Specialty)));
    }
}
