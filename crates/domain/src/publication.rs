//! 发布内容实体
//!
//! 发布内容一经创建不可修改。相等性只看内部标识，
//! 字段完全相同的两条发布内容仍然是不同的发布。

use std::hash::{Hash, Hasher};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{PublicationId, PublisherId, Timestamp};

/// 不允许出现在发布内容中的词汇（忽略大小写，子串匹配）
pub const INAPPROPRIATE_WORDS: [&str; 3] = ["elephant", "ice cream", "orange"];

#[derive(Debug, Clone)]
pub struct Publication {
    id: PublicationId,
    publisher: PublisherId,
    message: String,
    publication_time: Timestamp,
}

impl Publication {
    /// 创建发布内容，包含不当词汇时失败。
    ///
    /// 创建不会把发布内容登记到任何地方，由调用方负责保存。
    pub fn made_by(
        publisher: PublisherId,
        message: impl Into<String>,
        publication_time: Timestamp,
    ) -> DomainResult<Self> {
        let message = message.into();
        Self::assert_is_appropriate(&message)?;

        Ok(Self {
            id: PublicationId::next(),
            publisher,
            message,
            publication_time,
        })
    }

    pub fn id(&self) -> PublicationId {
        self.id
    }

    pub fn publisher(&self) -> PublisherId {
        self.publisher
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn publication_time(&self) -> Timestamp {
        self.publication_time
    }

    pub fn has_message(&self, candidate: &str) -> bool {
        self.message == candidate
    }

    pub fn was_published_at(&self, candidate: Timestamp) -> bool {
        self.publication_time == candidate
    }

    fn assert_is_appropriate(message: &str) -> DomainResult<()> {
        let lowered = message.to_lowercase();
        if INAPPROPRIATE_WORDS.iter().any(|word| lowered.contains(word)) {
            return Err(DomainError::InappropriateContent);
        }
        Ok(())
    }
}

impl PartialEq for Publication {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Publication {}

impl Hash for Publication {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
