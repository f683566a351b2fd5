// Shared build-script helper for README-to-rustdoc conversion.
// Pulled into each crate's build.rs via: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render the crate README into a rustdoc-friendly page under `OUT_DIR`.
///
/// READMEs link to real files (`src/foo.rs`) so the links work on the
/// repository host; rustdoc wants module paths instead. The rendering
/// strips the `src/` prefix and the `.rs` suffix, and rewrites
/// workspace-root links to the repository URL from the workspace manifest.
fn render_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        return; // No README, nothing to render
    };

    let mut page = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = workspace_repo_url(crate_dir) {
        page = page.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), page).unwrap();
}

/// Repository URL declared in the workspace manifest, if any.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(manifest).ok()?;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository")
            && line.contains('=')
            && let Some(start) = line.find('"')
            && let Some(end) = line.rfind('"')
            && start < end
        {
            return Some(line[start + 1..end].to_string());
        }
    }
    None
}
