use std::path::Path;
use std::process::Command;

/// Stamps `GIT_HASH` for `devfolio --version`
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // New commits move a ref under .git/refs, branch switches move HEAD
    if Path::new(".git").is_dir() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs");
    }

    let hash = describe_head().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", hash);
}

/// Short commit id, suffixed with `-dirty` for uncommitted changes
fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
