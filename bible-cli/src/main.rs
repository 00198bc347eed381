use bible_core::ChapterFetcher;
use clap::{Parser, Subcommand};
use std::io::Write;

mod cmd;

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nBuilt: ",
        env!("BUILD_DATE"),
        "\nCommit: ",
        env!("GIT_HASH")
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "bible-ko",
    about = "Korean Bible text from the Korean Bible Society reading pages",
    version = env!("CARGO_PKG_VERSION"),
    long_version = long_version()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print every verse of a chapter
    Chapter {
        /// Book name (English or Korean) or code, e.g. Genesis, 창세기, gen
        #[arg(long)]
        book: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        chapter: u32,
        /// Translation code (GAE, GAE1, NIR, KOR, CEV)
        #[arg(long, default_value = bible_core::DEFAULT_VERSION)]
        translation: String,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a verse or an inclusive range of verses
    Verses {
        #[arg(long)]
        book: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        chapter: u32,
        /// First verse
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
        /// Last verse (defaults to --start)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        end: Option<u32>,
        #[arg(long, default_value = bible_core::DEFAULT_VERSION)]
        translation: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Keyword search over chapters 1-3 of the first two books
    Search {
        #[arg(long)]
        query: String,
        /// Books to search, in order (only the first two are used)
        #[arg(long = "book")]
        books: Vec<String>,
        #[arg(long, default_value = bible_core::DEFAULT_VERSION)]
        translation: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List books, optionally for one testament (OT/NT)
    Books {
        #[arg(long)]
        testament: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show one verse in several translations
    Compare {
        #[arg(long)]
        book: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        chapter: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        verse: u32,
        /// Translation codes (default: all)
        #[arg(long = "translation")]
        translations: Vec<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print CLI version
    Version {},
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fetcher = ChapterFetcher::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Chapter { book, chapter, translation, json } => {
            cmd::read::chapter(&fetcher, &mut out, &book, chapter, &translation, json)
        }
        Commands::Verses { book, chapter, start, end, translation, json } => {
            cmd::read::verses(&fetcher, &mut out, &book, chapter, start, end, &translation, json)
        }
        Commands::Search { query, books, translation, json } => {
            cmd::search::search(&fetcher, &mut out, &query, &books, &translation, json)
        }
        Commands::Books { testament, json } => cmd::books::books(&mut out, testament.as_deref(), json),
        Commands::Compare { book, chapter, verse, translations, json } => {
            cmd::read::compare(&fetcher, &mut out, &book, chapter, verse, &translations, json)
        }
        Commands::Version {} => {
            writeln!(out, "bible-ko {}", long_version())?;
            Ok(())
        }
    }
}
