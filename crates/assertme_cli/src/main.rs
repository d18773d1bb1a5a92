//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `assertme_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Keep a tiny probe to validate core crate wiring independently from
    // the application UI runtime.
    println!("assertme_core ping={}", assertme_core::ping());
    println!("assertme_core version={}", assertme_core::core_version());
}
