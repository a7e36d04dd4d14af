use vergen::EmitBuilder;

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    // Exposes VERGEN_RUSTC_* to src/runtime.rs
    EmitBuilder::builder()
        .rustc_semver()
        .rustc_channel()
        .rustc_commit_date()
        .rustc_host_triple()
        .emit()?;

    Ok(())
}
