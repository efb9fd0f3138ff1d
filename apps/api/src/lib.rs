pub mod actions;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod flows;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod view;
pub mod watchlist;
