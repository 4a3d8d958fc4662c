//! Domain layer for the Objetos domain

pub mod entities;
pub mod validation;
