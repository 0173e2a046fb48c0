//! 用户实体定义
//!
//! 用户是不可变的身份记录，结构相等即视为同一用户。

use crate::errors::{DomainError, DomainResult};

/// 用户实体
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    /// 用户名（系统内唯一，不能为空白）
    name: String,
    /// 个人简介
    about: String,
    /// 个人主页
    home_page: String,
}

impl User {
    /// 创建新用户，用户名为空或只含空白时失败
    pub fn named(
        name: impl Into<String>,
        about: impl Into<String>,
        home_page: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self {
            name,
            about: about.into(),
            home_page: home_page.into(),
        })
    }

    pub fn is_named(&self, candidate: &str) -> bool {
        self.name == candidate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn home_page(&self) -> &str {
        &self.home_page
    }

    fn validate_name(name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::NameCannotBeBlank);
        }
        Ok(())
    }
}
