use std::env;
use std::fs;
use std::path::PathBuf;

/// Put the firmware memory layout where the `cortex-m-rt` linker script finds it
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if let Err(e) = fs::copy("memory.x", out_dir.join("memory.x")) {
        println!("cargo:warning=Could not copy memory.x: {}", e);
    }
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
