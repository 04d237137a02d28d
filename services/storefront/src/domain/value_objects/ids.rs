//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 客户 ID（单调递增分配）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl CustomerId {
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl FromStr for CustomerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_next() {
        let id: CustomerId = "21".parse().unwrap();
        assert_eq!(id, CustomerId(21));
        assert_eq!(id.next(), CustomerId(22));
        assert!("abc".parse::<CustomerId>().is_err());
    }
}
