use flagfetch::config::{self, Config};

fn main() {
    let config = config::load_config();
    init_tracing(&config);

    let report = flagfetch::collect_report();

    println!("{}", report.software.system);
    println!("{}", report.software.flags.render(&config));
    println!("{}", report.hardware.flags.render(&config));
}

/// Route detector traces to stderr. Off unless the config asks for debug
/// output or FLAGFETCH_LOG overrides it.
fn init_tracing(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if config.debug { "flagfetch=debug" } else { "off" };
    let filter = EnvFilter::try_from_env("FLAGFETCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
