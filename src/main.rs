use iced_reel::app::{self, Flags};
use iced_reel::feed;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: iced_reel <feed.json> [--index N] [--lang LOCALE] [--api-base URL]";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        api_base: args.opt_value_from_str("--api-base").unwrap_or(None),
        index: args
            .opt_value_from_str("--index")
            .unwrap_or(None)
            .unwrap_or(0),
        photos: Vec::new(),
    };

    let Some(feed_path) = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
    else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let photos = match feed::load_feed(&feed_path) {
        Ok(photos) => photos,
        Err(err) => {
            eprintln!("failed to load feed {}: {}", feed_path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags { photos, ..flags };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
