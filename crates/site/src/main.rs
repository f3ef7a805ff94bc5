//! Binary entrypoint for the browser-hosted shine button gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    shine_ui_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Run `trunk serve` from crates/site or build `shine_ui_site` for wasm32 with the `csr` feature."
    );
}
