//! 托管聊天服务适配器

mod hosted_session_client;

pub use hosted_session_client::{HostedSessionClient, PROJECT_HEADER};
