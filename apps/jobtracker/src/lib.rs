//! Job application tracker: a client-side state layer (auth and job stores,
//! derived statistics, AI helpers) over a swappable backend, plus an
//! in-memory mock of the tracker API that can be served over HTTP.

pub mod api_client;
pub mod assistant;
pub mod backend;
pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;
pub mod view;
