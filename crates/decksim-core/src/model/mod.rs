pub mod card;
pub mod combo;
pub mod deck;
pub mod requirement;
