//! Server application core modules.
//!
//! This module contains all server-side functionality for Fyyur: configuration, HTTP
//! routing and handlers, database repositories, services that own transactions and
//! business rules, and the startup helpers wiring the database & session store together.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
