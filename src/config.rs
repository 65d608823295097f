pub mod jwt;
pub mod scoring;
pub mod settings;
