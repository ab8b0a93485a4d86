use metatags::{cli, config::Config, logger, MetaResult, MetaTags, UrlPaginator};
use tracing::{error, info};

fn run(args: cli::Args) -> MetaResult<String> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut paginator = UrlPaginator::new(&args.url, args.page).with_page_name(&config.page_name);
    if let Some(last_page) = args.last_page {
        paginator = paginator.with_last_page(last_page)?;
    }
    info!(url = %args.url, page = args.page, "rendering head tags");

    let mut meta = MetaTags::new(config);
    meta.set_title(args.title.as_deref())
        .set_description(args.description.as_deref())
        .set_keywords(args.keywords.iter().map(String::as_str))
        .set_robots(args.robots.as_deref())
        .set_pagination_links(&paginator);

    Ok(meta.to_html())
}

fn main() {
    let args = cli::parse();
    logger::init(args.log);

    match run(args) {
        Ok(html) => println!("{html}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
