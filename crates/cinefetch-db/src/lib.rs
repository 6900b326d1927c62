//! Document store for saved movies and teachers.
//!
//! Uses `rusqlite` (bundled `SQLite`). Documents get a store-assigned
//! string ID and can be searched by field prefix.

mod connection;
mod dirs;
mod migrations;
/// Movie documents.
pub mod movies;
mod prefix;
/// Teacher documents.
pub mod teachers;

pub use connection::open_db;
pub use dirs::{AppDir, app_dir};
pub use movies::{MovieDoc, add_movie, add_movies, load_movies, search_movies};
pub use teachers::{TeacherDoc, add_teacher, load_teachers, search_teachers};
