pub mod fixture_handler;
pub mod league_handler;
