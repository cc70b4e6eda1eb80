pub mod guard;
pub mod slug;
