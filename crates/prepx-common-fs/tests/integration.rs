use std::path::PathBuf;

use prepx_common_fs as fs_util;

#[test]
fn test_path_normalization() {
    let test_cases = vec![
        ("./a/b/../c", "a/c"),
        ("a/./b", "a/b"),
        ("a/../b", "b"),
        ("../../a/b", "../../a/b"),
        ("a/b/c/../../d", "a/d"),
        ("", "."),
        (".", "."),
        ("..", ".."),
    ];

    for (input, expected) in test_cases {
        let normalized = fs_util::path::normalize(input);
        assert_eq!(
            normalized,
            PathBuf::from(expected),
            "failed for input: {input}"
        );
    }
}

#[test]
fn test_absolutize_against_base() {
    let test_cases = vec![
        ("raw", "/work", "/work/raw"),
        ("./raw", "/work", "/work/raw"),
        ("../raw", "/work/exp", "/work/raw"),
        ("/abs/raw", "/work", "/abs/raw"),
        ("a/b/../c", "/work", "/work/a/c"),
    ];

    for (path, base, expected) in test_cases {
        assert_eq!(
            fs_util::path::absolutize(path, base),
            PathBuf::from(expected),
            "failed for absolutize({path}, {base})"
        );
    }
}

#[test]
fn test_scaffold_primitives_compose() {
    // ensure_dir + symlink + list_dir_names cover a minimal scaffold round.
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let run = dir.path().join("runs/run1");

    fs_util::ensure_dir(&data).unwrap();
    fs_util::ensure_dir(&run).unwrap();
    fs_util::require_exists(&data).unwrap();
    fs_util::symlink(&data, run.join("raw_data")).unwrap();

    let names = fs_util::list_dir_names(dir.path().join("runs")).unwrap();
    assert_eq!(names, vec!["run1"]);
    assert_eq!(std::fs::read_link(run.join("raw_data")).unwrap(), data);
}
