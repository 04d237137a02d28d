//! 金额值对象

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// 金额保留的小数位
pub const CENT_SCALE: u32 = 2;

/// 四舍五入到分（0.5 远离零进位）
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// 金额值对象
///
/// 内部使用十进制精确运算，只在需要输出时取整到分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// 以分为单位创建
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CENT_SCALE))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// 取整到分
    pub fn rounded(&self) -> Self {
        Self(round_cents(self.0))
    }

    /// 单价乘以数量
    pub fn times(&self, quantity: u64) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// 除以数量（数量为零时按 1 处理）
    pub fn per_unit(&self, quantity: u64) -> Self {
        Self(self.0 / Decimal::from(quantity.max(1)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
