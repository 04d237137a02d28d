//! 客户等级枚举
//!
//! 等级由订单数派生，仅用于展示，不持久化

use serde::{Deserialize, Serialize};

/// 金卡门槛
const GOLD_MIN_ORDERS: u32 = 80;
/// 银卡门槛
const SILVER_MIN_ORDERS: u32 = 50;

/// 客户等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Gold,
    Silver,
    Bronze,
}

impl CustomerTier {
    pub fn from_order_count(order_count: u32) -> Self {
        if order_count >= GOLD_MIN_ORDERS {
            Self::Gold
        } else if order_count >= SILVER_MIN_ORDERS {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(CustomerTier::from_order_count(0), CustomerTier::Bronze);
        assert_eq!(CustomerTier::from_order_count(49), CustomerTier::Bronze);
        assert_eq!(CustomerTier::from_order_count(50), CustomerTier::Silver);
        assert_eq!(CustomerTier::from_order_count(79), CustomerTier::Silver);
        assert_eq!(CustomerTier::from_order_count(80), CustomerTier::Gold);
    }
}
