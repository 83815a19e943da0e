// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-answer authorization and fingerprint doubles that count their calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use plugset_core::{AuthorizationGate, FingerprintService, Settings, Username};

/// Answers every authorization check with the same verdict.
#[derive(Debug, Default)]
pub struct StaticGate {
    admin: bool,
    checks: AtomicUsize,
}

impl StaticGate {
    pub fn admin() -> Self {
        Self {
            admin: true,
            checks: AtomicUsize::new(0),
        }
    }

    pub fn non_admin() -> Self {
        Self::default()
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl AuthorizationGate for StaticGate {
    fn is_administrator(&self, _caller: &Username) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.admin
    }
}

/// Returns the same fingerprint for any settings.
#[derive(Debug)]
pub struct FixedFingerprint(pub String);

impl FixedFingerprint {
    pub fn new(fingerprint: impl Into<String>) -> Self {
        Self(fingerprint.into())
    }
}

impl FingerprintService for FixedFingerprint {
    fn fingerprint_of(&self, _settings: &Settings) -> String {
        self.0.clone()
    }
}
