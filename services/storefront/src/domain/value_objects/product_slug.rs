//! 商品 slug 值对象

use serde::{Deserialize, Serialize};
use stand_common::slugify;
use thiserror::Error;

/// 商品 slug 错误
#[derive(Debug, Error)]
pub enum ProductSlugError {
    #[error("Product name must contain at least one letter or digit")]
    Empty,
}

/// 商品 slug
///
/// 业务规则:
/// - 由商品名称派生，作为商品的唯一标识
/// - 只包含小写字母、数字和单个连字符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductSlug(String);

impl ProductSlug {
    /// 从商品名称派生 slug
    pub fn from_name(name: &str) -> Result<Self, ProductSlugError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(ProductSlugError::Empty);
        }
        Ok(Self(slug))
    }

    /// 使用已知 slug（种子数据）
    pub(crate) fn from_static(slug: &'static str) -> Self {
        Self(slug.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for ProductSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
