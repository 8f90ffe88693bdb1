use scout_core::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_project_id_from_path() {
    let id = project_id_from_path(Path::new("/home/user/project"));

    // 16 hex characters of the SHA256 digest
    assert!(scout_types::is_project_id(id.as_str()));

    // Same input should produce same id
    let id2 = project_id_from_path(Path::new("/home/user/project"));
    assert_eq!(id, id2);

    // Different input should produce different id
    let id3 = project_id_from_path(Path::new("/different/path"));
    assert_ne!(id, id3);
}

#[test]
fn test_project_id_is_stable_across_runs() {
    // Prefix of sha256("/home/user/project")
    let id = project_id_from_path(Path::new("/home/user/project"));
    assert_eq!(id.as_str(), "9dad1e4e08b0b11c");
}

#[test]
fn test_equivalent_spellings_share_an_id() {
    let policy = PathPolicy::with_home(Some(Path::new("/home/user")));
    let a = policy
        .validate_and_identify(Path::new("/home/user/project"))
        .unwrap();
    let b = policy
        .validate_and_identify(Path::new("/home/user/./other/../project/"))
        .unwrap();
    assert_eq!(a.id, b.id);
    assert_eq!(a.path, b.path);
}

#[test]
fn test_validation_does_not_touch_filesystem() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let policy = PathPolicy::new([temp_dir.path()]);
    let record = policy.validate_and_identify(&missing).unwrap();
    assert_eq!(record.name, "does-not-exist");
}

#[test]
fn test_temp_dir_outside_policy_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let policy = PathPolicy::new([PathBuf::from("/nonexistent-base")]);
    assert!(policy.validate_and_identify(temp_dir.path()).is_none());
}

#[test]
fn test_resolve_data_dir_with_explicit() {
    let result = resolve_data_dir(Some("/explicit/scout")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/scout"));
}

#[test]
fn test_resolve_home_prefers_override() {
    let home = resolve_home(Some(Path::new("/custom/home"))).unwrap();
    assert_eq!(home, PathBuf::from("/custom/home"));
}
