/// Routes `tracing` output through libtest's captured writer.
///
/// Filtered by `RUST_LOG`; set `RUST_LOG=unitest=debug` to see why a failure
/// came without a quoted description.
pub fn init_test_tracing() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
        {
            eprintln!("init_test_tracing failed to init global tracing_subscriber: {err:?}");
        }
    });
}
