//! Bakes the nearest release tag into the binary as `GIT_TAG`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(tag) = release_tag() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}

fn release_tag() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0", "--match", "v*"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let tag = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!tag.is_empty()).then_some(tag)
}
