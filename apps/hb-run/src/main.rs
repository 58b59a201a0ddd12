fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hb-run");
    hb_reaction::run();
}
