//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `publicaciones_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("publicaciones_core ping={}", publicaciones_core::ping());
    println!(
        "publicaciones_core version={}",
        publicaciones_core::core_version()
    );
}
