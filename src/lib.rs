pub mod agent;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod prompts;
pub mod routes;
pub mod service;
