//! Version identifier of the toolchain that built this binary.
//!
//! Captured by `build.rs` through vergen. Any part the build could not
//! determine is left out of the string.

const RUSTC_SEMVER: Option<&str> = option_env!("VERGEN_RUSTC_SEMVER");
const RUSTC_CHANNEL: Option<&str> = option_env!("VERGEN_RUSTC_CHANNEL");
const RUSTC_COMMIT_DATE: Option<&str> = option_env!("VERGEN_RUSTC_COMMIT_DATE");
const RUSTC_HOST_TRIPLE: Option<&str> = option_env!("VERGEN_RUSTC_HOST_TRIPLE");

/// Fallback when vergen produced nothing usable.
const DECLARED_RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Full version string, e.g. `1.82.0 (stable, 2024-10-15) [x86_64-unknown-linux-gnu]`.
///
/// Never empty and always a single line.
pub fn version_string() -> String {
    compose(
        RUSTC_SEMVER,
        RUSTC_CHANNEL,
        RUSTC_COMMIT_DATE,
        RUSTC_HOST_TRIPLE,
    )
}

fn compose(
    semver: Option<&str>,
    channel: Option<&str>,
    commit_date: Option<&str>,
    host_triple: Option<&str>,
) -> String {
    let semver = usable(semver)
        .or_else(|| usable(Some(DECLARED_RUST_VERSION)))
        .unwrap_or("unknown");

    let mut version = semver.to_string();

    let details: Vec<&str> = [channel, commit_date]
        .into_iter()
        .filter_map(usable)
        .collect();
    if !details.is_empty() {
        version.push_str(&format!(" ({})", details.join(", ")));
    }

    if let Some(triple) = usable(host_triple) {
        version.push_str(&format!(" [{}]", triple));
    }

    version
}

/// Vergen writes a placeholder when it cannot query rustc.
fn usable(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "VERGEN_IDEMPOTENT_OUTPUT" && !v.contains('\n'))
}
