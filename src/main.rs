// SPDX-License-Identifier: MPL-2.0
use roost_gallery::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
roost_gallery - gallery lightbox viewer

USAGE:
  roost_gallery [OPTIONS] [DIR]

ARGS:
  <DIR>               Directory whose images form the gallery (default: .)

OPTIONS:
  --lang <LOCALE>     Interface language (e.g. en-US, it)
  --config <FILE>     Settings file to use instead of the platform default
  -h, --help          Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roost_gallery=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("Ignoring --lang: {}", err);
        None
    });
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!("Ignoring --config: {}", err);
        None
    });
    let gallery_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::info!("Starting gallery for {}", gallery_dir.display());

    app::run(Flags {
        lang,
        config_path,
        gallery_dir,
    })
}
