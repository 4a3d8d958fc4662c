//! API handlers for the Objetos domain

pub mod admin;
pub mod auth;
pub mod objetos;
pub mod sistema;
