#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod boundary;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod nav;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod section;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod subscription;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod telemetry;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
