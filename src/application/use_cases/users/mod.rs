pub mod get_user;
pub mod list_users;
pub mod update_avatar;
pub mod update_profile;
