// File: crates/scatter-render-skia/build.rs
// Summary: Links advapi32 when the skia raster backend targets Windows.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_OS");
    // Checked through the env var so cross builds see the target, not the host.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
