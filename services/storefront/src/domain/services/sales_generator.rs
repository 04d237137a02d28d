//! 模拟销售数据生成器
//!
//! 对窗口内每一天、每个商品生成一条销售记录：
//! 基础销量在 `[20, 70)` 内均匀抽取，乘以商品系数与周末系数后向下取整，
//! 收入为 `销量 × 单价` 四舍五入到分。
//! 同一种子总是生成同一份账本。

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use stand_config::SalesConfig;
use stand_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::domain::entities::{Product, SaleRecord};

/// 默认回溯天数
pub const DEFAULT_WINDOW_DAYS: u32 = 180;

/// 回溯天数上限（约十年）
pub const MAX_WINDOW_DAYS: u32 = 3650;
/// 周末系数上限
pub const MAX_WEEKEND_BOOST: Decimal = Decimal::ONE_HUNDRED;

/// 基础销量下界（含）
const BASE_QUANTITY_MIN: u64 = 20;
/// 基础销量上界（不含）
const BASE_QUANTITY_MAX: u64 = 70;

/// 默认商品销量系数，未列出的商品为 1.0
pub fn default_multipliers() -> HashMap<String, Decimal> {
    [
        ("cavendish", Decimal::new(50, 1)),
        ("organic-cavendish", Decimal::new(32, 1)),
        ("plantain", Decimal::new(28, 1)),
        ("baby-banana", Decimal::new(20, 1)),
        ("red-banana", Decimal::new(12, 1)),
        ("manzano", Decimal::new(15, 1)),
        ("burro-banana", Decimal::new(8, 1)),
        ("organic-plantain", Decimal::new(18, 1)),
    ]
    .into_iter()
    .map(|(id, multiplier)| (id.to_string(), multiplier))
    .collect()
}

/// 进程生命周期内只生成一次的销售账本
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 销售数据生成器
#[derive(Debug, Clone)]
pub struct SalesGenerator {
    window_days: u32,
    weekend_boost: Decimal,
    multipliers: HashMap<String, Decimal>,
}

impl Default for SalesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS, Decimal::new(14, 1))
    }
}

impl SalesGenerator {
    pub fn new(window_days: u32, weekend_boost: Decimal) -> Self {
        Self {
            window_days,
            weekend_boost,
            multipliers: default_multipliers(),
        }
    }

    /// 从配置创建
    pub fn from_config(config: &SalesConfig) -> AppResult<Self> {
        let weekend_boost = Decimal::try_from(config.weekend_boost).map_err(|e| {
            AppError::validation(format!(
                "Invalid weekend boost {}: {}",
                config.weekend_boost, e
            ))
        })?;
        if weekend_boost.is_sign_negative() || weekend_boost > MAX_WEEKEND_BOOST {
            return Err(AppError::validation(format!(
                "Weekend boost must be between 0 and {}",
                MAX_WEEKEND_BOOST
            )));
        }
        if config.window_days > MAX_WINDOW_DAYS {
            return Err(AppError::validation(format!(
                "Sales window must not exceed {} days",
                MAX_WINDOW_DAYS
            )));
        }
        Ok(Self::new(config.window_days, weekend_boost))
    }

    pub fn multiplier_for(&self, product_id: &str) -> Decimal {
        self.multipliers
            .get(product_id)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// 以给定种子生成账本，种子为空时使用系统熵
    pub fn generate(
        &self,
        products: &[Product],
        today: NaiveDate,
        seed: Option<u64>,
    ) -> SalesLedger {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let ledger = self.generate_with(products, today, &mut rng);

        info!(
            records = ledger.len(),
            products = products.len(),
            window_days = self.window_days,
            seeded = seed.is_some(),
            "Sales ledger generated"
        );
        ledger
    }

    /// 使用调用方提供的随机源生成账本
    pub fn generate_with<R: Rng>(
        &self,
        products: &[Product],
        today: NaiveDate,
        rng: &mut R,
    ) -> SalesLedger {
        let mut records = Vec::with_capacity((self.window_days as usize + 1) * products.len());

        for days_ago in (0..=self.window_days).rev() {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(days_ago))) else {
                debug!(days_ago, "Date out of range, skipped");
                continue;
            };
            let boost = self.day_boost(date);

            for product in products {
                let base = rng.gen_range(BASE_QUANTITY_MIN..BASE_QUANTITY_MAX);
                records.push(self.record_for(product, date, base, boost));
            }
        }

        SalesLedger::new(records)
    }

    fn day_boost(&self, date: NaiveDate) -> Decimal {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => self.weekend_boost,
            _ => Decimal::ONE,
        }
    }

    fn record_for(
        &self,
        product: &Product,
        date: NaiveDate,
        base: u64,
        boost: Decimal,
    ) -> SaleRecord {
        let multiplier = self.multiplier_for(product.id.as_str());
        let quantity = (Decimal::from(base) * multiplier * boost)
            .floor()
            .to_u64()
            .unwrap_or(0);

        SaleRecord {
            product_id: product.id.clone(),
            date,
            quantity,
            revenue: product.price.times(quantity).rounded(),
        }
    }
}
