//! 领域层
//!
//! 包含业务实体、值对象、枚举、仓储接口与销售领域服务

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use value_objects::*;
