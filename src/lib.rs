pub mod api_connection;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod recipe_annotator;
pub mod recipe_generator;
pub mod session;
