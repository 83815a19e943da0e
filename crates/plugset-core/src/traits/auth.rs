// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authorization check for settings edits.

use crate::types::Username;

/// Decides whether a caller may edit plugin settings.
pub trait AuthorizationGate: Send + Sync {
    fn is_administrator(&self, caller: &Username) -> bool;
}
