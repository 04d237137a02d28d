//! 商品分类枚举

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 无效分类错误
#[derive(Debug, Error)]
#[error("Category must be one of: fresh, organic, specialty")]
pub struct InvalidCategory;

/// 商品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fresh,
    Organic,
    Specialty,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [Self::Fresh, Self::Organic, Self::Specialty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Organic => "organic",
            Self::Specialty => "specialty",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = InvalidCategory;

    /// 忽略大小写和首尾空白
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or(InvalidCategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Organic".parse::<ProductCategory>().unwrap(), ProductCategory::Organic);
        assert_eq!(" fresh ".parse::<ProductCategory>().unwrap(), ProductCategory::Fresh);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "tropical".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Category must be one of: fresh, organic, specialty");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Specialty).unwrap();
        assert_eq!(json, "\"specialty\"");
    }
}
