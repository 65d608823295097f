pub mod auth;
pub mod common;
pub mod fixture;
pub mod league;
pub mod player_rating;
pub mod prediction;
pub mod team;
pub mod user;
