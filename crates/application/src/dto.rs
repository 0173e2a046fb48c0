use domain::{format_timestamp, Publication, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub username: String,
    pub password: String,
    pub about: String,
    pub home_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
    pub username: String,
    pub about: String,
    pub home_page: String,
}

impl UserDto {
    pub fn from_user(user_id: impl Into<String>, user: &User) -> Self {
        Self {
            user_id: user_id.into(),
            username: user.name().to_owned(),
            about: user.about().to_owned(),
            home_page: user.home_page().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationTextDto {
    pub text: String,
}

/// `follower_id` 关注 `followee_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowingDto {
    pub follower_id: String,
    pub followee_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikerDto {
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesDto {
    pub likes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
    pub post_id: String,
    pub user_id: String,
    pub text: String,
    pub date_time: String,
    pub likes: usize,
}

impl PublicationDto {
    pub fn from_publication(
        post_id: impl Into<String>,
        user_id: impl Into<String>,
        publication: &Publication,
        likes: usize,
    ) -> Self {
        Self {
            post_id: post_id.into(),
            user_id: user_id.into(),
            text: publication.message().to_owned(),
            date_time: format_timestamp(&publication.publication_time()),
            likes,
        }
    }
}
