// Data models and DTOs

pub mod movie;

pub use movie::Movie;
