pub mod catalog_handler;
pub mod fixture_handler;
pub mod league_handler;
pub mod prediction_handler;
pub mod rating_handler;
