use domain::DomainError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// 未知的用户标识或登录失败
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApplicationError::Internal(message.into())
    }
}
