//! 接收层
//!
//! 把外部标识翻译成领域对象、调用 [`OpenChatSystem`]，再把结果转换成携带外部标识的 DTO。
//! 领域层的认证结果是 `Option`，登录失败在这里才变成 [`ApplicationError::InvalidCredentials`]。

use domain::{DomainError, OpenChatSystem, Publication, User};
use tracing::{debug, info};

use crate::dto::{
    FollowingDto, LikerDto, LikesDto, LoginDto, PublicationDto, PublicationTextDto,
    RegistrationDto, UserDto,
};
use crate::error::ApplicationError;
use crate::identity::IdentityMap;

#[derive(Debug)]
pub struct RestReceptionist {
    system: OpenChatSystem,
    ids_by_user: IdentityMap<User>,
    ids_by_publication: IdentityMap<Publication>,
}

impl RestReceptionist {
    pub fn new(system: OpenChatSystem) -> Self {
        Self {
            system,
            ids_by_user: IdentityMap::new(),
            ids_by_publication: IdentityMap::new(),
        }
    }

    pub fn system(&self) -> &OpenChatSystem {
        &self.system
    }

    pub fn register_user(
        &mut self,
        registration: RegistrationDto,
    ) -> Result<UserDto, ApplicationError> {
        let user = self.system.register(
            &registration.username,
            &registration.password,
            &registration.about,
            &registration.home_page,
        )?;
        let user_id = self.ids_by_user.mint(user.clone());
        info!(username = %user.name(), user_id = %user_id, "user registered");
        Ok(UserDto::from_user(user_id, &user))
    }

    pub fn login(&self, login: LoginDto) -> Result<UserDto, ApplicationError> {
        let user = self
            .system
            .authenticate_user(&login.username, &login.password)
            .ok_or(ApplicationError::InvalidCredentials)?;
        debug!(username = %user.name(), "user logged in");
        self.user_dto_for(&user)
    }

    pub fn users(&self) -> Result<Vec<UserDto>, ApplicationError> {
        self.user_dtos_for(&self.system.users())
    }

    /// `follower_id` 成为 `followee_id` 的关注者
    pub fn followings(&mut self, following: FollowingDto) -> Result<(), ApplicationError> {
        let followee = self.user_name_identified_as(&following.followee_id)?;
        let follower = self.user_name_identified_as(&following.follower_id)?;
        self.system.follow_for_user_named(&followee, &follower)?;
        info!(followee = %followee, follower = %follower, "following created");
        Ok(())
    }

    pub fn followers_of(&self, user_id: &str) -> Result<Vec<UserDto>, ApplicationError> {
        let user_name = self.user_name_identified_as(user_id)?;
        let followers = self.system.followers_of_user_named(&user_name)?;
        self.user_dtos_for(&followers)
    }

    pub fn add_publication(
        &mut self,
        user_id: &str,
        publication: PublicationTextDto,
    ) -> Result<PublicationDto, ApplicationError> {
        let user_name = self.user_name_identified_as(user_id)?;
        let publication = self
            .system
            .publish_for_user_named(&user_name, &publication.text)?;
        let publication_id = self.ids_by_publication.mint(publication.clone());
        info!(username = %user_name, post_id = %publication_id, "publication added");
        Ok(PublicationDto::from_publication(
            publication_id,
            user_id,
            &publication,
            self.system.likes_of(&publication)?,
        ))
    }

    pub fn timeline_of(&self, user_id: &str) -> Result<Vec<PublicationDto>, ApplicationError> {
        let user_name = self.user_name_identified_as(user_id)?;
        debug!(username = %user_name, "timeline requested");
        self.publication_dtos_for(&self.system.time_line_for_user_named(&user_name)?)
    }

    pub fn wall_of(&self, user_id: &str) -> Result<Vec<PublicationDto>, ApplicationError> {
        let user_name = self.user_name_identified_as(user_id)?;
        debug!(username = %user_name, "wall requested");
        self.publication_dtos_for(&self.system.wall_for_user_named(&user_name)?)
    }

    pub fn like_publication_identified_as(
        &mut self,
        publication_id: &str,
        liker: LikerDto,
    ) -> Result<LikesDto, ApplicationError> {
        let user_name = self.user_name_identified_as(&liker.user_id)?;
        let publication = self
            .ids_by_publication
            .resolve(publication_id)
            .ok_or(DomainError::InvalidPublication)?;
        let likes = self.system.like_publication(publication, &user_name)?;
        info!(post_id = %publication_id, username = %user_name, likes, "publication liked");
        Ok(LikesDto { likes })
    }

    fn user_name_identified_as(&self, user_id: &str) -> Result<String, ApplicationError> {
        self.ids_by_user
            .resolve(user_id)
            .map(|user| user.name().to_owned())
            .ok_or(ApplicationError::InvalidCredentials)
    }

    fn user_id_for(&self, user: &User) -> Result<&str, ApplicationError> {
        self.ids_by_user
            .id_of(user)
            .ok_or_else(|| ApplicationError::internal(format!("no id for user {}", user.name())))
    }

    fn user_dto_for(&self, user: &User) -> Result<UserDto, ApplicationError> {
        Ok(UserDto::from_user(self.user_id_for(user)?, user))
    }

    fn user_dtos_for(&self, users: &[User]) -> Result<Vec<UserDto>, ApplicationError> {
        users.iter().map(|user| self.user_dto_for(user)).collect()
    }

    fn publication_dtos_for(
        &self,
        publications: &[Publication],
    ) -> Result<Vec<PublicationDto>, ApplicationError> {
        publications
            .iter()
            .map(|publication| -> Result<PublicationDto, ApplicationError> {
                let post_id = self.ids_by_publication.id_of(publication).ok_or_else(|| {
                    ApplicationError::internal(format!("no id for {}", publication.id()))
                })?;
                let author = self.system.author_of(publication)?;
                Ok(PublicationDto::from_publication(
                    post_id,
                    self.user_id_for(author)?,
                    publication,
                    self.system.likes_of(publication)?,
                ))
            })
            .collect()
    }
}
