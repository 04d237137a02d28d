//! 团队成员

use serde::{Deserialize, Serialize};

use crate::domain::enums::MemberStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub avatar: String,
    pub status: MemberStatus,
}
