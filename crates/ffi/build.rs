use std::env;
use std::path::PathBuf;

const HEADER_NAME: &str = "FireAdvisoryFFI.h";
const SOURCES: [&str; 3] = ["src/lib.rs", "src/error.rs", "src/helpers.rs"];

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    // Header sits at the workspace root, next to the top-level Cargo.toml.
    let header = crate_dir.join("../..").join(HEADER_NAME);

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("FIRE_ADVISORY_FFI_H")
        .with_header("/* Fire behaviour advisory C API. Generated by cbindgen, do not edit. */")
        .with_sys_include("stdbool.h")
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings for fire-advisory-ffi");
    bindings.write_to_file(header);

    for source in SOURCES {
        println!("cargo:rerun-if-changed={source}");
    }
}
