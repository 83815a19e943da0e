// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading manifests from a directory into the shared registries.

use plugset_core::{ExtensionKind, PluginInfoFinder};
use plugset_registry::{MetadataRegistry, StaticPluginInfoFinder, load_manifest_dir, register_manifests};

fn write(dir: &std::path::Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn directory_manifests_are_loaded_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "b-yum.toml",
        r#"
[plugin]
id = "yum"
extension = "package-repository"

[[plugin.settings]]
key = "REPO_URL"
required = true
"#,
    );
    write(
        dir.path(),
        "a-git.toml",
        r#"
[plugin]
id = "git.multi"
extension = "scm"

[[plugin.settings]]
key = "url"
"#,
    );
    write(
        dir.path(),
        "c-git-task.toml",
        r#"
[plugin]
id = "git.multi"
extension = "task"
"#,
    );
    write(dir.path(), "README.md", "not a manifest");

    let manifests = load_manifest_dir(dir.path()).unwrap();
    let ids: Vec<&str> = manifests.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["git.multi", "yum", "git.multi"]);

    let registry = MetadataRegistry::new();
    let finder = StaticPluginInfoFinder::new();
    register_manifests(&manifests, &registry, &finder);

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.kinds_for("git.multi"),
        vec![ExtensionKind::Scm, ExtensionKind::Task]
    );
    let combined = finder.plugin_info_for("git.multi").unwrap();
    assert!(combined.extension_info(ExtensionKind::Scm).unwrap().handles_settings());
    assert!(!combined.extension_info(ExtensionKind::Task).unwrap().handles_settings());
}

#[test]
fn invalid_manifest_in_directory_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "broken.toml",
        r#"
[plugin]
id = "broken"
extension = "mystery"
"#,
    );

    let err = load_manifest_dir(dir.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken.toml"), "got: {message}");
    assert!(message.contains("unknown extension"), "got: {message}");
}

#[test]
fn missing_directory_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest_dir(&dir.path().join("nope")).unwrap_err();
    assert_eq!(err.http_status(), 500);
}
