//! OpenChat 聚合根
//!
//! 持有全部注册用户（用户卡片）、发布者以及点赞登记表，对外提供所有领域操作。
//! 用户按注册顺序保存；点赞登记以发布内容的内部标识为键。

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::clock::Clock;
use crate::errors::{DomainError, DomainResult};
use crate::publication::Publication;
use crate::publisher::{Publisher, Publishers};
use crate::user::User;
use crate::value_objects::{PublicationId, PublisherId};

/// 把注册用户与其凭据、发布者绑定在一起
struct UserCard {
    user: User,
    password: String,
    publisher: PublisherId,
}

impl UserCard {
    fn is_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

pub struct OpenChatSystem {
    clock: Arc<dyn Clock>,
    user_cards: IndexMap<String, UserCard>,
    publishers: Publishers,
    likers_by_publication: HashMap<PublicationId, HashSet<PublisherId>>,
}

impl fmt::Debug for OpenChatSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenChatSystem")
            .field("users", &self.user_cards.len())
            .field("publications", &self.likers_by_publication.len())
            .finish()
    }
}

impl OpenChatSystem {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            user_cards: IndexMap::new(),
            publishers: Publishers::new(),
            likers_by_publication: HashMap::new(),
        }
    }

    /// 注册用户。用户名重复的检查先于用户构造。
    pub fn register(
        &mut self,
        user_name: &str,
        password: &str,
        about: &str,
        home_page: &str,
    ) -> DomainResult<User> {
        self.assert_is_not_duplicated(user_name)?;

        let user = User::named(user_name, about, home_page)?;
        let publisher = self.publishers.add(Publisher::related_to(user.clone()));
        self.user_cards.insert(
            user_name.to_owned(),
            UserCard {
                user: user.clone(),
                password: password.to_owned(),
                publisher,
            },
        );
        Ok(user)
    }

    pub fn has_users(&self) -> bool {
        !self.user_cards.is_empty()
    }

    pub fn number_of_users(&self) -> usize {
        self.user_cards.len()
    }

    pub fn has_user_named(&self, candidate: &str) -> bool {
        self.user_card_for_user_named(candidate).is_some()
    }

    /// 按注册顺序返回全部用户
    pub fn users(&self) -> Vec<User> {
        self.user_cards.values().map(|card| card.user.clone()).collect()
    }

    /// 认证用户。用户不存在或密码不匹配时返回 `None`，不会报错。
    pub fn authenticate_user(&self, user_name: &str, password: &str) -> Option<User> {
        self.user_card_for_user_named(user_name)
            .filter(|card| card.is_password(password))
            .map(|card| card.user.clone())
    }

    /// 根据认证结果执行两个闭包之一
    pub fn with_authenticated_user_do<T>(
        &self,
        user_name: &str,
        password: &str,
        authenticated: impl FnOnce(User) -> T,
        failed: impl FnOnce() -> T,
    ) -> T {
        match self.authenticate_user(user_name, password) {
            Some(user) => authenticated(user),
            None => failed(),
        }
    }

    /// 以当前时间为用户发布内容，并为其登记空的点赞集合
    pub fn publish_for_user_named(
        &mut self,
        user_name: &str,
        message: &str,
    ) -> DomainResult<Publication> {
        let now = self.clock.now();
        let publication = self
            .publisher_for_user_named_mut(user_name)?
            .publish(message, now)?
            .clone();
        self.likers_by_publication
            .insert(publication.id(), HashSet::new());
        Ok(publication)
    }

    pub fn time_line_for_user_named(&self, user_name: &str) -> DomainResult<Vec<Publication>> {
        let publisher = self.publisher_for_user_named(user_name)?;
        Ok(publisher.time_line().into_iter().cloned().collect())
    }

    pub fn wall_for_user_named(&self, user_name: &str) -> DomainResult<Vec<Publication>> {
        let publisher = self.publisher_for_user_named(user_name)?;
        Ok(publisher
            .wall(&self.publishers)
            .into_iter()
            .cloned()
            .collect())
    }

    /// `follower_user_name` 成为 `followed_user_name` 的关注者
    pub fn follow_for_user_named(
        &mut self,
        followed_user_name: &str,
        follower_user_name: &str,
    ) -> DomainResult<()> {
        let followed = self.publisher_id_for_user_named(followed_user_name)?;
        let follower = self.publisher_id_for_user_named(follower_user_name)?;
        self.publishers
            .get_mut(followed)
            .ok_or(DomainError::UserNotRegistered)?
            .followed_by(follower)
    }

    /// 按关注先后返回关注者
    pub fn followers_of_user_named(&self, user_name: &str) -> DomainResult<Vec<User>> {
        let publisher = self.publisher_for_user_named(user_name)?;
        Ok(publisher
            .followers()
            .iter()
            .filter_map(|id| self.publishers.get(*id))
            .map(|follower| follower.related_user().clone())
            .collect())
    }

    /// 点赞并返回新的点赞数。同一用户重复点赞不会增加计数。
    pub fn like_publication(
        &mut self,
        publication: &Publication,
        user_name: &str,
    ) -> DomainResult<usize> {
        let liker = self.publisher_id_for_user_named(user_name)?;
        let likers = self
            .likers_by_publication
            .get_mut(&publication.id())
            .ok_or(DomainError::InvalidPublication)?;
        likers.insert(liker);
        Ok(likers.len())
    }

    pub fn likes_of(&self, publication: &Publication) -> DomainResult<usize> {
        self.likers_by_publication
            .get(&publication.id())
            .map(HashSet::len)
            .ok_or(DomainError::InvalidPublication)
    }

    /// 发布内容作者对应的用户
    pub fn author_of(&self, publication: &Publication) -> DomainResult<&User> {
        self.publishers
            .get(publication.publisher())
            .map(Publisher::related_user)
            .ok_or(DomainError::InvalidPublication)
    }

    fn assert_is_not_duplicated(&self, user_name: &str) -> DomainResult<()> {
        if self.has_user_named(user_name) {
            return Err(DomainError::CannotRegisterSameUserTwice);
        }
        Ok(())
    }

    // 所有按用户名的查找都经过这里
    fn user_card_for_user_named(&self, user_name: &str) -> Option<&UserCard> {
        self.user_cards.get(user_name)
    }

    fn publisher_id_for_user_named(&self, user_name: &str) -> DomainResult<PublisherId> {
        self.user_card_for_user_named(user_name)
            .map(|card| card.publisher)
            .ok_or(DomainError::UserNotRegistered)
    }

    fn publisher_for_user_named(&self, user_name: &str) -> DomainResult<&Publisher> {
        let id = self.publisher_id_for_user_named(user_name)?;
        self.publishers.get(id).ok_or(DomainError::UserNotRegistered)
    }

    fn publisher_for_user_named_mut(&mut self, user_name: &str) -> DomainResult<&mut Publisher> {
        let id = self.publisher_id_for_user_named(user_name)?;
        self.publishers
            .get_mut(id)
            .ok_or(DomainError::UserNotRegistered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, MockClock};
    use crate::value_objects::{format_timestamp, Timestamp};
    use chrono::{TimeZone, Utc};

    const USER_NAME: &str = "Pepe Sanchez";
    const USER_PASSWORD: &str = "password";
    const USER_ABOUT: &str = "anotherAbout";
    const USER_HOME_PAGE: &str = "www.twitter.com/pepeSanchez";
    const ANOTHER_USER_NAME: &str = "Juan Perez";

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
    }

    fn create_system() -> (OpenChatSystem, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_at(start()));
        (OpenChatSystem::new(clock.clone()), clock)
    }

    fn register_user(system: &mut OpenChatSystem, user_name: &str) -> User {
        system
            .register(user_name, USER_PASSWORD, USER_ABOUT, USER_HOME_PAGE)
            .unwrap()
    }

    #[test]
    fn test_created_system_has_no_users() {
        let (system, _) = create_system();
        assert!(!system.has_users());
        assert!(!system.has_user_named(USER_NAME));
        assert_eq!(system.number_of_users(), 0);
    }

    #[test]
    fn test_can_register_user() {
        let (mut system, _) = create_system();
        let user = register_user(&mut system, USER_NAME);

        assert!(system.has_users());
        assert!(system.has_user_named(USER_NAME));
        assert_eq!(system.number_of_users(), 1);
        assert!(user.is_named(USER_NAME));
        assert_eq!(user.about(), USER_ABOUT);
        assert_eq!(user.home_page(), USER_HOME_PAGE);
    }

    #[test]
    fn test_can_register_many_users_in_order() {
        let (mut system, _) = create_system();
        let first = register_user(&mut system, USER_NAME);
        let second = register_user(&mut system, ANOTHER_USER_NAME);
        let third = register_user(&mut system, "Ana");

        assert_eq!(system.number_of_users(), 3);
        assert_eq!(system.users(), vec![first, second, third]);
    }

    #[test]
    fn test_cannot_register_same_user_twice() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        let result = system.register(USER_NAME, "other", "other about", "other home");

        assert_eq!(result, Err(DomainError::CannotRegisterSameUserTwice));
        assert_eq!(system.number_of_users(), 1);
        assert_eq!(system.users()[0].about(), USER_ABOUT);
    }

    #[test]
    fn test_cannot_register_blank_name() {
        let (mut system, _) = create_system();

        assert_eq!(
            system.register("  ", USER_PASSWORD, USER_ABOUT, USER_HOME_PAGE),
            Err(DomainError::NameCannotBeBlank)
        );
        assert!(!system.has_users());
    }

    #[test]
    fn test_authenticate_registered_user() {
        let (mut system, _) = create_system();
        let user = register_user(&mut system, USER_NAME);

        assert_eq!(system.authenticate_user(USER_NAME, USER_PASSWORD), Some(user));
    }

    #[test]
    fn test_authentication_failures_return_none() {
        let (mut system, _) = create_system();
        assert_eq!(system.authenticate_user(USER_NAME, USER_PASSWORD), None);

        register_user(&mut system, USER_NAME);
        assert_eq!(
            system.authenticate_user(USER_NAME, &format!("{USER_PASSWORD}something")),
            None
        );
        assert_eq!(system.authenticate_user(USER_NAME, ""), None);
    }

    #[test]
    fn test_with_authenticated_user_do() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        let authenticated = system.with_authenticated_user_do(
            USER_NAME,
            USER_PASSWORD,
            |user| user.name().to_owned(),
            || "failed".to_owned(),
        );
        let not_authenticated = system.with_authenticated_user_do(
            USER_NAME,
            "wrong",
            |user| user.name().to_owned(),
            || "failed".to_owned(),
        );

        assert_eq!(authenticated, USER_NAME);
        assert_eq!(not_authenticated, "failed");
    }

    #[test]
    fn test_registered_user_can_publish() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert!(publication.was_published_at(start()));
        assert_eq!(
            system.time_line_for_user_named(USER_NAME).unwrap(),
            vec![publication]
        );
    }

    #[test]
    fn test_publication_time_comes_from_clock() {
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(start());
        let mut system = OpenChatSystem::new(Arc::new(clock));
        register_user(&mut system, USER_NAME);

        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert_eq!(publication.publication_time(), start());
    }

    #[test]
    fn test_inappropriate_publication_is_rejected() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        assert_eq!(
            system.publish_for_user_named(USER_NAME, "I like ICE CREAM"),
            Err(DomainError::InappropriateContent)
        );
        assert!(system.time_line_for_user_named(USER_NAME).unwrap().is_empty());
    }

    #[test]
    fn test_not_registered_user_operations_fail() {
        let (mut system, _) = create_system();

        assert_eq!(
            system.publish_for_user_named(USER_NAME, "hello"),
            Err(DomainError::UserNotRegistered)
        );
        assert_eq!(
            system.time_line_for_user_named(USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
        assert_eq!(
            system.wall_for_user_named(USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
        assert_eq!(
            system.followers_of_user_named(USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
    }

    #[test]
    fn test_follow_requires_both_users_registered() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        assert_eq!(
            system.follow_for_user_named(USER_NAME, ANOTHER_USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
        assert_eq!(
            system.follow_for_user_named(ANOTHER_USER_NAME, USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
    }

    #[test]
    fn test_can_follow_registered_user() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        let follower = register_user(&mut system, ANOTHER_USER_NAME);

        system
            .follow_for_user_named(USER_NAME, ANOTHER_USER_NAME)
            .unwrap();

        assert_eq!(
            system.followers_of_user_named(USER_NAME).unwrap(),
            vec![follower]
        );
        assert!(system
            .followers_of_user_named(ANOTHER_USER_NAME)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_follow_rules_are_enforced() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        register_user(&mut system, ANOTHER_USER_NAME);

        assert_eq!(
            system.follow_for_user_named(USER_NAME, USER_NAME),
            Err(DomainError::CannotFollowSelf)
        );
        system
            .follow_for_user_named(USER_NAME, ANOTHER_USER_NAME)
            .unwrap();
        assert_eq!(
            system.follow_for_user_named(USER_NAME, ANOTHER_USER_NAME),
            Err(DomainError::CannotFollowTwice)
        );
        assert_eq!(system.followers_of_user_named(USER_NAME).unwrap().len(), 1);
    }

    #[test]
    fn test_can_get_wall_of_registered_user() {
        let (mut system, clock) = create_system();
        register_user(&mut system, USER_NAME);
        register_user(&mut system, ANOTHER_USER_NAME);
        system
            .follow_for_user_named(USER_NAME, ANOTHER_USER_NAME)
            .unwrap();

        let followed_publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();
        clock.advance_one_second();
        let follower_publication = system
            .publish_for_user_named(ANOTHER_USER_NAME, "bye")
            .unwrap();

        let wall = system.wall_for_user_named(USER_NAME).unwrap();

        assert_eq!(wall, vec![follower_publication.clone(), followed_publication]);
        assert_eq!(
            format_timestamp(&wall[0].publication_time()),
            "2023-05-01T12:00:01Z"
        );
        assert_eq!(
            format_timestamp(&wall[1].publication_time()),
            "2023-05-01T12:00:00Z"
        );
        assert_eq!(
            system.wall_for_user_named(ANOTHER_USER_NAME).unwrap(),
            vec![follower_publication]
        );
    }

    #[test]
    fn test_publications_have_no_likes_when_created() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);

        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert_eq!(system.likes_of(&publication), Ok(0));
    }

    #[test]
    fn test_registered_users_can_like_publication() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        register_user(&mut system, ANOTHER_USER_NAME);
        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert_eq!(system.like_publication(&publication, ANOTHER_USER_NAME), Ok(1));
        assert_eq!(system.like_publication(&publication, USER_NAME), Ok(2));
        assert_eq!(system.likes_of(&publication), Ok(2));
    }

    #[test]
    fn test_likes_by_user_count_only_once() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        register_user(&mut system, ANOTHER_USER_NAME);
        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        system
            .like_publication(&publication, ANOTHER_USER_NAME)
            .unwrap();
        let likes = system
            .like_publication(&publication, ANOTHER_USER_NAME)
            .unwrap();

        assert_eq!(likes, 1);
        assert_eq!(system.likes_of(&publication), Ok(1));
    }

    #[test]
    fn test_cannot_like_publication_not_published_through_system() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        let mut outsider =
            Publisher::related_to(User::named(USER_NAME, USER_ABOUT, USER_HOME_PAGE).unwrap());
        let publication = outsider.publish("hello", start()).unwrap().clone();

        assert_eq!(
            system.like_publication(&publication, USER_NAME),
            Err(DomainError::InvalidPublication)
        );
        assert_eq!(
            system.likes_of(&publication),
            Err(DomainError::InvalidPublication)
        );
    }

    #[test]
    fn test_not_registered_user_cannot_like_publication() {
        let (mut system, _) = create_system();
        register_user(&mut system, USER_NAME);
        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert_eq!(
            system.like_publication(&publication, ANOTHER_USER_NAME),
            Err(DomainError::UserNotRegistered)
        );
        assert_eq!(system.likes_of(&publication), Ok(0));
    }

    #[test]
    fn test_author_of_publication() {
        let (mut system, _) = create_system();
        let user = register_user(&mut system, USER_NAME);
        let publication = system.publish_for_user_named(USER_NAME, "hello").unwrap();

        assert_eq!(system.author_of(&publication), Ok(&user));
    }
}
