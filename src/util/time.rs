/// Milliseconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn unix_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Milliseconds since the UNIX epoch, from the page's performance clock
#[cfg(target_arch = "wasm32")]
pub fn unix_millis() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.time_origin() + perf.now())
        .unwrap_or(0.0)
}

/// Whole seconds since the UNIX epoch, used to stamp exported artifacts
pub fn timestamp_secs() -> u64 {
    (unix_millis() / 1000.0) as u64
}
