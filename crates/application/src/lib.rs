//! 应用层实现。
//!
//! 围绕领域模型提供接收层：外部标识的生成与解析、DTO 转换，
//! 以及把"认证失败"这类缺省结果转换为可报告的错误。

pub mod clock;
pub mod dto;
pub mod error;
pub mod identity;
pub mod receptionist;

pub use clock::SystemClock;
pub use domain::Clock;
pub use dto::{
    FollowingDto, LikerDto, LikesDto, LoginDto, PublicationDto, PublicationTextDto,
    RegistrationDto, UserDto,
};
pub use error::ApplicationError;
pub use identity::IdentityMap;
pub use receptionist::RestReceptionist;
