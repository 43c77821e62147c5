//! Tracing subscriber set-up.
//!
//! Only the binary installs a subscriber; `shiroha-core` and
//! `shiroha-adapters` just emit spans and events. The level comes from
//! [`GlobalArgs::log_level`] unless `RUST_LOG` is set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Install the global subscriber. Call once, before the first event.
///
/// Events always go to stderr so stdout stays clean for `list --format json`
/// and `completions`. With `--output-format json` each event is a JSON line.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(args));

    let fmt_layer = if args.output_format == OutputFormat::Json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(!args.no_color && std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// One directive per workspace crate, all at the same level.
fn filter_for(args: &GlobalArgs) -> EnvFilter {
    let level = args.log_level();
    EnvFilter::new(format!(
        "shiroha={level},shiroha_core={level},shiroha_adapters={level}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_every_crate() {
        let args = GlobalArgs {
            verbose: 2,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let rendered = filter_for(&args).to_string();
        for directive in ["shiroha=debug", "shiroha_core=debug", "shiroha_adapters=debug"] {
            assert!(rendered.contains(directive), "missing {directive}");
        }
    }
}
