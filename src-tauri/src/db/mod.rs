// Database module
// This module handles the SQLite bouquet store

pub mod connection;
pub mod migrations;
pub mod models;
pub mod operations;
