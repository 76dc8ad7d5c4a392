pub mod card_repository;
pub mod user_repository;
