//! Email 值对象

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email 值对象
///
/// 统一转为小写，唯一性比较因此不区分大小写
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// 创建新的 Email
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_string();

        if !email_address::EmailAddress::is_valid(&email) || !has_dotted_domain(&email) {
            return Err(EmailError::InvalidFormat(email));
        }

        Ok(Self(email.to_lowercase()))
    }

    /// 获取字符串引用
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 店铺只接受带顶级域的地址（`a@b` 之类被拒绝）
fn has_dotted_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain
                .split('.')
                .filter(|label| !label.is_empty())
                .count()
                >= 2
        })
        .unwrap_or(false)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email 错误
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}
