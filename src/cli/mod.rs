//! CLI subcommand implementations for the gateway binary.

pub mod fetch;
pub mod serve;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` still wins; the flags only move the crate's own default level.
pub fn init_tracing(verbose: bool, quiet: bool) {
    let directive = if verbose {
        "samvidha_gateway=debug"
    } else if quiet {
        "samvidha_gateway=warn"
    } else {
        "samvidha_gateway=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();
}
