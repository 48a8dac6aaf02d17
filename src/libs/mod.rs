//! Core library modules for the taskdeck application.
//!
//! Houses the domain types, the service layer the command surface calls
//! into, and the ambient infrastructure: configuration, data directory
//! resolution, messaging, and table rendering.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod service;
pub mod task;
pub mod view;
