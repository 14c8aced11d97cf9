/// Installs the fmt subscriber. The web launcher brings its own tracing
/// logger, so this is a no-op there. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing::Level;

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
