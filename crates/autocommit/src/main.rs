//! Autocommit CLI - settings manager for automated commit and push
//!
//! Binary name: `autocommit`

use std::process;

use autocommit::cli::{build_cli, dispatch};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    if let Err(err) = dispatch(&matches).await {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<autocommit_core::Error>()
            .map(autocommit_core::Error::exit_code)
            .unwrap_or(1);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
