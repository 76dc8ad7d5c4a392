pub mod create_card;
pub mod delete_card;
pub mod dislike_card;
pub mod like_card;
pub mod list_cards;
