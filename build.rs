//! Build script: embeds version information at compile time.

use std::process::Command;

fn main() {
    // Prefer DOTFILE_SYNC_VERSION if set by a release job, otherwise use
    // git describe for local builds.
    if let Ok(version) = std::env::var("DOTFILE_SYNC_VERSION") {
        println!("cargo:rustc-env=DOTFILE_SYNC_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=DOTFILE_SYNC_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DOTFILE_SYNC_VERSION");
}
