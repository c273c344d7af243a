fn main() {
    // Expose git info and build time to the binary
    let git_desc = git(&["describe", "--always", "--dirty", "--tags"]);
    println!(
        "cargo:rustc-env=GIT_DESC={}",
        git_desc.as_deref().unwrap_or("unknown")
    );

    let git_hash = git(&["rev-parse", "--short", "HEAD"]);
    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git_hash.as_deref().unwrap_or("unknown")
    );

    println!("cargo:rustc-env=BUILD_TIME={}", chrono::Utc::now().to_rfc3339());
    println!("cargo:rerun-if-changed=build.rs");
}

fn git(args: &[&str]) -> Option<String> {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                Some(String::from_utf8_lossy(&o.stdout).trim().to_string())
            } else {
                None
            }
        })
}
