pub mod catalog;
pub mod fixtures;
pub mod form;
pub mod game_weeks;
pub mod league;
pub mod memberships;
pub mod player_ratings;
pub mod predictions;
pub mod scoring;
pub mod standings;
pub mod validation;
