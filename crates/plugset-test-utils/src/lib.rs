// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Plugset integration tests.
//!
//! Provides hand-written collaborator doubles and a harness that wires the
//! settings orchestrator for fast, deterministic tests.
//!
//! # Components
//!
//! - [`MockExtension`] - Extension provider with scripted ownership, validation and notification
//! - [`InMemorySettingsRepository`] - Repository that records every upsert
//! - [`StaticGate`] / [`FixedFingerprint`] - Fixed answers for authorization and fingerprints
//! - [`TestHarness`] - One mock extension per extension kind wired into a service

pub mod gates;
pub mod harness;
pub mod mock_extension;
pub mod repository;

pub use gates::{FixedFingerprint, StaticGate};
pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_extension::{MockExtension, NotifyBehaviour};
pub use repository::InMemorySettingsRepository;
