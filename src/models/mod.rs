mod entity;

pub use entity::*;
