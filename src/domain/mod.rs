pub mod access;
pub mod category;
pub mod content;
pub mod errors;
pub mod listing;
pub mod municipal;
pub mod news;
pub mod slug;
