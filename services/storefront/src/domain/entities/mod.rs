//! 领域实体

mod customer;
mod product;
mod sale_record;
mod team_member;

pub use customer::*;
pub use product::*;
pub use sale_record::*;
pub use team_member::*;
