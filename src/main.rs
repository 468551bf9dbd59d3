// SPDX-License-Identifier: MPL-2.0
use folio_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio_lens - portfolio page viewer

USAGE:
  folio_lens [OPTIONS] [PAGE]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory with extra .ftl translations
  -h, --help            Print this help

ARGS:
  <PAGE>                Page manifest (.toml) to open
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let page_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        page_path,
        i18n_dir,
        config_dir,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(page = ?flags.page_path, lang = ?flags.lang, "starting folio_lens");
    app::run(flags)
}
