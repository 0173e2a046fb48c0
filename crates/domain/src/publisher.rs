//! 发布者聚合
//!
//! 每个注册用户对应一个发布者，持有该用户的发布内容与关注者列表，
//! 并据此计算时间线（仅自己的发布）与动态墙（自己加直接关注者的发布）。

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::errors::{DomainError, DomainResult};
use crate::publication::Publication;
use crate::user::User;
use crate::value_objects::{PublisherId, Timestamp};

#[derive(Debug)]
pub struct Publisher {
    id: PublisherId,
    user: User,
    /// 按关注先后排列
    followers: Vec<PublisherId>,
    /// 按发布先后排列
    publications: Vec<Publication>,
}

impl Publisher {
    pub fn related_to(user: User) -> Self {
        Self {
            id: PublisherId::next(),
            user,
            followers: Vec::new(),
            publications: Vec::new(),
        }
    }

    pub fn id(&self) -> PublisherId {
        self.id
    }

    pub fn related_user(&self) -> &User {
        &self.user
    }

    /// 添加关注者。不能关注自己，也不能重复关注。
    pub fn followed_by(&mut self, candidate: PublisherId) -> DomainResult<()> {
        if candidate == self.id {
            return Err(DomainError::CannotFollowSelf);
        }
        if self.is_followed_by(candidate) {
            return Err(DomainError::CannotFollowTwice);
        }
        self.followers.push(candidate);
        Ok(())
    }

    pub fn is_followed_by(&self, candidate: PublisherId) -> bool {
        self.followers.contains(&candidate)
    }

    pub fn has_followers(&self) -> bool {
        !self.followers.is_empty()
    }

    pub fn number_of_followers(&self) -> usize {
        self.followers.len()
    }

    pub fn followers(&self) -> &[PublisherId] {
        &self.followers
    }

    /// 发布新内容。内容不当时返回错误且不保存。
    pub fn publish(
        &mut self,
        message: impl Into<String>,
        publication_time: Timestamp,
    ) -> DomainResult<&Publication> {
        let publication = Publication::made_by(self.id, message, publication_time)?;
        self.publications.push(publication);
        Ok(&self.publications[self.publications.len() - 1])
    }

    pub fn has_publications(&self) -> bool {
        !self.publications.is_empty()
    }

    pub fn time_line(&self) -> Vec<&Publication> {
        sorted_latest_first(self.publications.iter().collect())
    }

    /// 自己与直接关注者的发布，最新的在前。
    ///
    /// 关注者通过 `publishers` 解析；关注者的关注者不会出现在结果中。
    pub fn wall<'a>(&'a self, publishers: &'a Publishers) -> Vec<&'a Publication> {
        let mut wall: Vec<&Publication> = self.publications.iter().collect();
        for follower in self.followers.iter().filter_map(|id| publishers.get(*id)) {
            wall.extend(follower.publications.iter());
        }
        sorted_latest_first(wall)
    }
}

// sort_by_key 是稳定排序，时间相同的发布保持原有顺序
fn sorted_latest_first(mut publications: Vec<&Publication>) -> Vec<&Publication> {
    publications.sort_by_key(|publication| Reverse(publication.publication_time()));
    publications
}

/// 发布者存储，按内部标识索引。
#[derive(Debug, Default)]
pub struct Publishers {
    by_id: HashMap<PublisherId, Publisher>,
}

impl Publishers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, publisher: Publisher) -> PublisherId {
        let id = publisher.id();
        self.by_id.insert(id, publisher);
        id
    }

    pub fn get(&self, id: PublisherId) -> Option<&Publisher> {
        self.by_id.get(&id)
    }

    pub fn get_mut(&mut self, id: PublisherId) -> Option<&mut Publisher> {
        self.by_id.get_mut(&id)
    }

    pub fn wall_of(&self, id: PublisherId) -> Option<Vec<&Publication>> {
        self.get(id).map(|publisher| publisher.wall(self))
    }
}
