// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed storage of plugin settings records.
//!
//! All statements run on one background connection owned by `tokio-rusqlite`,
//! so writes are serialized. [`SqliteSettingsRepository`] is the entry point.

pub mod database;
pub mod migrations;
pub mod queries;
pub mod repository;

pub use database::Database;
pub use repository::SqliteSettingsRepository;
