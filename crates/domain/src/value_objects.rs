use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// 统一的时间戳类型。
pub type Timestamp = DateTime<Utc>;

/// 对外输出的时间格式，秒级精度并以字面量 `Z` 结尾。
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

static NEXT_PUBLISHER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_PUBLICATION_ID: AtomicU64 = AtomicU64::new(1);

/// 发布者的内部标识，进程内单调递增，不对外暴露。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublisherId(u64);

impl PublisherId {
    pub fn next() -> Self {
        Self(NEXT_PUBLISHER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "publisher-{}", self.0)
    }
}

/// 发布内容的内部标识，进程内单调递增，不对外暴露。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicationId(u64);

impl PublicationId {
    pub fn next() -> Self {
        Self(NEXT_PUBLICATION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "publication-{}", self.0)
    }
}
