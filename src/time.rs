#[cfg(not(feature = "wasm"))]
use std::time::Instant;
#[cfg(not(feature = "wasm"))]
pub fn now() -> Instant {
    Instant::now()
}
#[cfg(not(feature = "wasm"))]
pub fn until_now(t: Instant) -> f64 {
    t.elapsed().as_secs_f64()
}
#[cfg(feature = "wasm")]
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}
#[cfg(feature = "wasm")]
pub fn until_now(t: f64) -> f64 {
    (now() - t) / 1000.0
}
