// SPDX-License-Identifier: MPL-2.0
use photo_stream::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
PhotoStream - browse a public photo stream in a justified grid

USAGE:
  photo_stream [OPTIONS]

OPTIONS:
  --api-key <KEY>       API key (overrides PHOTO_STREAM_API_KEY and settings.toml)
  --user-id <ID>        User whose public photos are shown
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        api_key: args.opt_value_from_str("--api-key")?,
        user_id: args.opt_value_from_str("--user-id")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_stream=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!("PhotoStream v{}", env!("CARGO_PKG_VERSION"));
    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
