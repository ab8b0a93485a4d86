use clap::Parser;
use std::path::PathBuf;

use crate::logger::LogMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render SEO head tags for a paginated page", long_about = None)]
struct CliArgs {
    /// Base URL of the resource, without a page parameter
    #[arg(short, long)]
    url: String,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    last_page: Option<usize>,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    #[arg(long)]
    robots: Option<String>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogMode::Plain)]
    log: LogMode,
}

#[derive(Debug)]
pub struct Args {
    pub url: String,
    pub page: usize,
    pub last_page: Option<usize>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub robots: Option<String>,
    pub config: Option<PathBuf>,
    pub log: LogMode,
}

pub fn parse() -> Args {
    let cli = CliArgs::parse();

    Args {
        url: cli.url,
        page: cli.page,
        last_page: cli.last_page,
        title: cli.title,
        description: cli.description,
        keywords: cli.keywords,
        robots: cli.robots,
        config: cli.config,
        log: cli.log,
    }
}
