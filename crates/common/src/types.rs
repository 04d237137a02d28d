//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 分页参数（偏移量模式）
///
/// `limit` 为空时返回偏移量之后的全部记录
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: Option<usize>,
    pub offset: usize,
}

impl Pagination {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit,
            offset: offset.unwrap_or(0),
        }
    }

    /// 对已过滤的结果集截取分页窗口
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = self.limit.unwrap_or(usize::MAX);
        items.into_iter().skip(self.offset).take(limit).collect()
    }
}

/// 列表查询结果
///
/// `total` 为集合总数，`filtered` 为本次返回的条数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub filtered: usize,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self {
            filtered: items.len(),
            items,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            filtered: self.filtered,
        }
    }
}
