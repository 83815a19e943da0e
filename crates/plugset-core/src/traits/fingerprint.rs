// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content digests used for optimistic concurrency.

use crate::settings::Settings;

/// Computes a stable digest of a settings snapshot.
///
/// Two snapshots with the same plugin id and the same key/value map must
/// produce the same fingerprint regardless of how they were built.
pub trait FingerprintService: Send + Sync {
    fn fingerprint_of(&self, settings: &Settings) -> String;
}
