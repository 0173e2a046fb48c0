//! OpenChat 核心领域模型
//!
//! 包含用户、发布内容、发布者以及聚合根 [`OpenChatSystem`]，
//! 负责注册、认证、发布、关注与点赞等业务规则。

pub mod clock;
pub mod errors;
pub mod publication;
pub mod publisher;
pub mod system;
pub mod user;
pub mod value_objects;

// 重新导出常用类型
pub use clock::{Clock, ManualClock};
pub use errors::{DomainError, DomainResult};
pub use publication::{Publication, INAPPROPRIATE_WORDS};
pub use publisher::{Publisher, Publishers};
pub use system::OpenChatSystem;
pub use user::User;
pub use value_objects::{format_timestamp, PublicationId, PublisherId, Timestamp, TIMESTAMP_FORMAT};

#[cfg(any(test, feature = "testing"))]
pub use clock::MockClock;
