//! Core domain layer for Bikeshare Explorer.
//!
//! Holds the typed trip data model, the city catalog, the error taxonomy,
//! settings handling and small formatting / timestamp helpers shared by the
//! data and session layers.

pub mod cities;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
