//! 客户实体

use serde::{Deserialize, Serialize};
use stand_domain_core::Entity;

use crate::domain::enums::CustomerTier;
use crate::domain::value_objects::{CustomerId, Email};

/// 未提供国家时的默认值
pub const DEFAULT_COUNTRY: &str = "USA";

/// 客户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub order_count: u32,
}

impl Customer {
    /// 由草稿和分配的 ID 生成客户，新客户订单数为 0
    pub fn from_draft(id: CustomerId, draft: NewCustomer) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip: draft.zip,
            country: draft.country,
            order_count: 0,
        }
    }

    pub fn tier(&self) -> CustomerTier {
        CustomerTier::from_order_count(self.order_count)
    }

    /// 城市、州、国家拼接的位置描述
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 待创建的客户（ID 由仓储在插入时分配）
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// 客户过滤条件
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub country: Option<String>,
}

impl CustomerFilter {
    /// 国家比较不区分大小写
    pub fn matches(&self, customer: &Customer) -> bool {
        self.country
            .as_deref()
            .is_none_or(|country| customer.country.eq_ignore_ascii_case(country.trim()))
    }
}
