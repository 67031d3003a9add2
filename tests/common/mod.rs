//! Common test helpers: materialize reference assignment projects.

use std::fs;
use std::path::{Path, PathBuf};

/// The reference candidate file, exactly as a correct submission looks.
pub const MAIN_JAVA: &str = r#"package com.yaksha.assignment;

import com.yaksha.utility.MathOperations;
import com.yaksha.utility.StringOperations;

public class Main {
    public static void main(String[] args) {
        // Using MathOperations class
        MathOperations mathOperations = new MathOperations();
        System.out.println("Addition of 5 and 3: " + mathOperations.add(5, 3));
        System.out.println("Multiplication of 5 and 3: " + mathOperations.multiply(5, 3));

        // Using StringOperations class
        StringOperations stringOperations = new StringOperations();
        System.out.println("Concatenation of 'Hello' and 'World': " + stringOperations.concatenate("Hello", "World"));
        System.out.println("Length of 'Hello': " + stringOperations.getLength("Hello"));
    }
}
"#;

pub const MATH_OPERATIONS_JAVA: &str = r#"package com.yaksha.utility;

public class MathOperations {
    public int add(int a, int b) {
        return a + b;
    }

    public int multiply(int a, int b) {
        return a * b;
    }
}
"#;

pub const STRING_OPERATIONS_JAVA: &str = r#"package com.yaksha.utility;

public class StringOperations {
    public String concatenate(String str1, String str2) {
        return str1 + str2;
    }

    public int getLength(String str) {
        return str.length();
    }
}
"#;

/// Write a file under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Write the utility classes of the reference project (both required
/// packages and classes, but no candidate).
pub fn write_utility_classes(root: &Path) {
    write_file(
        root,
        "src/main/java/com/yaksha/utility/MathOperations.java",
        MATH_OPERATIONS_JAVA,
    );
    write_file(
        root,
        "src/main/java/com/yaksha/utility/StringOperations.java",
        STRING_OPERATIONS_JAVA,
    );
}

/// Write the full reference project into `root` and return the candidate
/// file path.
pub fn write_reference_project(root: &Path) -> PathBuf {
    write_utility_classes(root);
    write_file(
        root,
        "src/main/java/com/yaksha/assignment/Main.java",
        MAIN_JAVA,
    )
}
