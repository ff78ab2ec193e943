//! Shared fixtures for codesim integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Small C++ program
pub const PROGRAM_A: &str = r#"#include <iostream>

int add(int a, int b) {
    return a + b;
}

int main() {
    int total = 0;
    for (int i = 0; i < 10; i++) {
        total = add(total, i);
    }
    std::cout << total << std::endl;
    return 0;
}
"#;

/// `PROGRAM_A` with `total` renamed to `sum`
pub const PROGRAM_A_RENAMED: &str = r#"#include <iostream>

int add(int a, int b) {
    return a + b;
}

int main() {
    int sum = 0;
    for (int i = 0; i < 10; i++) {
        sum = add(sum, i);
    }
    std::cout << sum << std::endl;
    return 0;
}
"#;

/// Unrelated C++ program
pub const PROGRAM_B: &str = r#"#include <cmath>

struct Point {
    double x;
    double y;
};

double dist(const Point& p, const Point& q) {
    double dx = p.x - q.x;
    double dy = p.y - q.y;
    return std::sqrt(dx * dx + dy * dy);
}
"#;

/// Unbalanced braces
pub const BROKEN: &str = "int main() { return 0; }}}\n";

/// Write `content` into `dir` and return its path
pub fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}
