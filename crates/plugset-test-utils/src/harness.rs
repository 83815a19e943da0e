// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring the settings orchestrator with mock collaborators.
//!
//! `TestHarness` registers one [`MockExtension`] per extension kind, in the
//! order package-repository, scm, task, notification, configrepo, and builds a
//! [`PluginSettingsService`] over them.

use std::sync::Arc;

use plugset_config::StorageConfig;
use plugset_core::{
    AuthorizationGate, ExtensionKind, ExtensionProvider, FingerprintService, PlugsetError,
    SettingsRepository,
};
use plugset_registry::{ExtensionSet, MetadataRegistry, StaticPluginInfoFinder};
use plugset_settings::{ContentFingerprinter, PluginSettingsService};
use plugset_storage::SqliteSettingsRepository;

use crate::gates::StaticGate;
use crate::mock_extension::MockExtension;
use crate::repository::InMemorySettingsRepository;

/// Registration order of the mock extensions.
pub const EXTENSION_ORDER: [ExtensionKind; 5] = [
    ExtensionKind::PackageRepository,
    ExtensionKind::Scm,
    ExtensionKind::Task,
    ExtensionKind::Notification,
    ExtensionKind::ConfigRepo,
];

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    gate: StaticGate,
    fingerprints: Option<Arc<dyn FingerprintService>>,
    sqlite: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            gate: StaticGate::admin(),
            fingerprints: None,
            sqlite: false,
        }
    }

    /// Treat every caller as a non-administrator.
    pub fn non_admin(mut self) -> Self {
        self.gate = StaticGate::non_admin();
        self
    }

    /// Replace the content fingerprinter.
    pub fn with_fingerprints(mut self, fingerprints: impl FingerprintService + 'static) -> Self {
        let fingerprints: Arc<dyn FingerprintService> = Arc::new(fingerprints);
        self.fingerprints = Some(fingerprints);
        self
    }

    /// Persist into a temporary SQLite database instead of memory.
    pub fn with_sqlite(mut self) -> Self {
        self.sqlite = true;
        self
    }

    pub async fn build(self) -> Result<TestHarness, PlugsetError> {
        let mocks: Vec<Arc<MockExtension>> = EXTENSION_ORDER
            .iter()
            .map(|kind| Arc::new(MockExtension::new(*kind)))
            .collect();

        let mut extensions = ExtensionSet::new();
        for mock in &mocks {
            let extension: Arc<dyn ExtensionProvider> = mock.clone();
            extensions.register(extension);
        }

        let memory_repository = Arc::new(InMemorySettingsRepository::new());
        let mut temp_dir = None;
        let repository: Arc<dyn SettingsRepository> = if self.sqlite {
            let dir = tempfile::TempDir::new().map_err(PlugsetError::storage)?;
            let config = StorageConfig {
                database_path: dir.path().join("test.db").display().to_string(),
                wal_mode: true,
            };
            temp_dir = Some(dir);
            Arc::new(SqliteSettingsRepository::open(config).await?)
        } else {
            memory_repository.clone()
        };

        let metadata = Arc::new(MetadataRegistry::new());
        let plugin_infos = Arc::new(StaticPluginInfoFinder::new());
        let gate = Arc::new(self.gate);
        let fingerprints = self
            .fingerprints
            .unwrap_or_else(|| Arc::new(ContentFingerprinter::new()) as Arc<dyn FingerprintService>);

        let service = PluginSettingsService::new(
            Arc::new(extensions),
            metadata.clone(),
            repository.clone(),
            gate.clone() as Arc<dyn AuthorizationGate>,
            fingerprints,
            plugin_infos.clone(),
        );

        tracing::debug!(sqlite = temp_dir.is_some(), "test harness ready");

        Ok(TestHarness {
            service,
            mocks,
            metadata,
            plugin_infos,
            memory_repository,
            repository,
            gate,
            _temp_dir: temp_dir,
        })
    }
}

/// A wired settings service plus handles to every collaborator for assertions.
pub struct TestHarness {
    pub service: PluginSettingsService,
    /// Mock extensions in [`EXTENSION_ORDER`].
    pub mocks: Vec<Arc<MockExtension>>,
    pub metadata: Arc<MetadataRegistry>,
    pub plugin_infos: Arc<StaticPluginInfoFinder>,
    /// In-memory repository; the one the service uses unless built with SQLite.
    pub memory_repository: Arc<InMemorySettingsRepository>,
    /// The repository the service persists into.
    pub repository: Arc<dyn SettingsRepository>,
    pub gate: Arc<StaticGate>,
    _temp_dir: Option<tempfile::TempDir>,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Harness with an administrator gate and in-memory storage.
    pub async fn new() -> Result<Self, PlugsetError> {
        Self::builder().build().await
    }

    /// The mock extension registered for `kind`.
    pub fn extension(&self, kind: ExtensionKind) -> &Arc<MockExtension> {
        let index = EXTENSION_ORDER
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.mocks[index]
    }

    /// Every mock extension except the one for `kind`.
    pub fn other_extensions(&self, kind: ExtensionKind) -> impl Iterator<Item = &Arc<MockExtension>> {
        self.mocks
            .iter()
            .filter(move |mock| mock.extension_kind() != kind)
    }
}
