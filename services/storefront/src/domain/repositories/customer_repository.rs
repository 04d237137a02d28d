//! 客户仓储接口

use async_trait::async_trait;
use stand_errors::AppResult;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::value_objects::CustomerId;

/// 客户仓储接口
///
/// 客户只追加、不删除
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 根据 ID 查找客户
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// 按插入顺序返回全部客户的快照
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// 原子地检查邮箱唯一、分配下一个 ID 并追加
    ///
    /// 邮箱已存在时返回 `AppError::Conflict`
    async fn insert_unique(&self, draft: NewCustomer) -> AppResult<Customer>;
}
