//! 领域模型错误定义
//!
//! 每个变体对应一条业务规则，错误信息是固定的、可直接返回给客户端的原因说明。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// 用户名为空或只包含空白字符
    #[error("Name can not be blank")]
    NameCannotBeBlank,

    /// 用户名已被注册
    #[error("Username already in use.")]
    CannotRegisterSameUserTwice,

    /// 用户未注册
    #[error("User not registered")]
    UserNotRegistered,

    /// 发布内容包含不当词汇
    #[error("Post contains inappropriate language.")]
    InappropriateContent,

    /// 不能关注自己
    #[error("Can not follow self")]
    CannotFollowSelf,

    /// 不能重复关注
    #[error("Can not follow publisher twice")]
    CannotFollowTwice,

    /// 发布内容不是通过系统发布的
    #[error("Invalid post")]
    InvalidPublication,
}

impl DomainError {
    /// 稳定的机器可读错误码，供接口层使用
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameCannotBeBlank => "NAME_CANNOT_BE_BLANK",
            Self::CannotRegisterSameUserTwice => "CANNOT_REGISTER_SAME_USER_TWICE",
            Self::UserNotRegistered => "USER_NOT_REGISTERED",
            Self::InappropriateContent => "INAPPROPRIATE_CONTENT",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::CannotFollowTwice => "CANNOT_FOLLOW_TWICE",
            Self::InvalidPublication => "INVALID_PUBLICATION",
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;
