//! 商品仓储接口

use async_trait::async_trait;
use stand_errors::AppResult;

use crate::domain::entities::Product;

/// 商品仓储接口
///
/// 商品只追加、不删除
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 根据 slug 查找商品
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>>;

    /// 按插入顺序返回全部商品的快照
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// 原子地检查 slug 唯一并追加
    ///
    /// slug 已存在时返回 `AppError::Conflict`
    async fn insert_unique(&self, product: Product) -> AppResult<Product>;
}
