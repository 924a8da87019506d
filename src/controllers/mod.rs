pub mod movies;

pub use movies::MoviesController;
