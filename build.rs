//! Embeds the `tpl/` tree into the binary.
//!
//! Writes `$OUT_DIR/template_bundle.rs`, a static slice of `BundleEntry`
//! values (one per file, sorted by path) that `src/bundle.rs` includes.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE_ROOT: &str = "tpl";

fn main() {
    println!("cargo:rerun-if-changed={}", TEMPLATE_ROOT);
    println!("cargo:rerun-if-changed=build.sh");

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let root = manifest_dir.join(TEMPLATE_ROOT);

    let mut files = Vec::new();
    if root.is_dir() {
        collect_files(&root, &mut files);
    }

    // Bundle paths are `/`-separated and sorted as strings, independent of
    // the host's path separator.
    let mut entries: Vec<(String, PathBuf)> = files
        .into_iter()
        .map(|file| {
            let relative = file
                .strip_prefix(&manifest_dir)
                .expect("template file outside manifest dir");
            let bundle_path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (bundle_path, file)
        })
        .collect();
    entries.sort();

    let mut out = String::from("pub static EMBEDDED_ENTRIES: &[BundleEntry<'static>] = &[\n");
    for (bundle_path, file) in &entries {
        writeln!(
            out,
            "    BundleEntry::new({:?}, include_bytes!({:?})),",
            bundle_path,
            file.to_string_lossy()
        )
        .unwrap();
    }
    out.push_str("];\n");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("template_bundle.rs"), out).unwrap();
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            println!("cargo:rerun-if-changed={}", path.display());
            files.push(path);
        }
    }
}
