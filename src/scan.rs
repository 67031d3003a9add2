//! Project tree scanner.
//!
//! Walks a project root once per check invocation and collects the declared
//! package names and top-level class names across every `.java` file. Files
//! that fail to read or parse are skipped and recorded; the scan is the one
//! place in the system where a parse failure is recoverable.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parse;

/// Names collected from one scan of a project tree.
#[derive(Debug, Default)]
pub struct SourceTree {
    /// Package names declared anywhere in the tree.
    pub packages: BTreeSet<String>,
    /// Unqualified top-level type names found anywhere in the tree.
    pub classes: BTreeSet<String>,
    /// Files skipped because they could not be read or parsed, with the
    /// reason. Never fatal.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scan every `.java` file under `root`. Fails only if the root itself
/// cannot be read; problems below the root are recorded in
/// [`SourceTree::skipped`] and the scan continues.
pub fn scan_tree(root: &Path) -> Result<SourceTree> {
    let mut tree = SourceTree::default();
    scan_dir(root, &mut tree, true)?;
    Ok(tree)
}

fn scan_dir(dir: &Path, tree: &mut SourceTree, is_root: bool) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if !is_root => {
            tree.skipped
                .push((dir.to_path_buf(), format!("cannot read directory: {}", e)));
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read directory: {}", dir.display()))
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tree.skipped
                    .push((dir.to_path_buf(), format!("cannot read entry: {}", e)));
                continue;
            }
        };

        if path.is_dir() {
            scan_dir(&path, tree, false)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            match parse::parse_file(&path) {
                Ok(unit) => {
                    if let Some(pkg) = unit.package {
                        tree.packages.insert(pkg);
                    }
                    for ty in &unit.types {
                        tree.classes.insert(ty.name.clone());
                    }
                }
                Err(e) => tree.skipped.push((path, format!("{:#}", e))),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_collects_packages_and_classes() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "src/com/yaksha/utility/MathOperations.java",
            "package com.yaksha.utility;\npublic class MathOperations {}\n",
        );
        write(
            tmp.path(),
            "src/com/yaksha/assignment/Main.java",
            "package com.yaksha.assignment;\npublic class Main {}\n",
        );

        let tree = scan_tree(tmp.path()).unwrap();
        assert!(tree.packages.contains("com.yaksha.utility"));
        assert!(tree.packages.contains("com.yaksha.assignment"));
        assert!(tree.classes.contains("MathOperations"));
        assert!(tree.classes.contains("Main"));
        assert!(tree.skipped.is_empty());
    }

    #[test]
    fn test_scan_skips_malformed_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Good.java", "public class Good {}\n");
        write(tmp.path(), "Broken.java", "class {{{ not java\n");

        let tree = scan_tree(tmp.path()).unwrap();
        assert!(tree.classes.contains("Good"));
        assert_eq!(tree.skipped.len(), 1);
        assert!(tree.skipped[0].0.ends_with("Broken.java"));
    }

    #[test]
    fn test_scan_ignores_non_java_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "notes.txt", "not java, not scanned");
        write(tmp.path(), "pom.xml", "<project/>");

        let tree = scan_tree(tmp.path()).unwrap();
        assert!(tree.packages.is_empty());
        assert!(tree.classes.is_empty());
        assert!(tree.skipped.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        assert!(scan_tree(Path::new("/no/such/root")).is_err());
    }

    #[test]
    fn test_scan_multiple_top_level_types_in_one_file() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "Pair.java",
            "public class First {}\nclass Second {}\n",
        );

        let tree = scan_tree(tmp.path()).unwrap();
        assert!(tree.classes.contains("First"));
        assert!(tree.classes.contains("Second"));
    }
}
