pub mod entities;
pub mod ranking;
pub mod rating;
