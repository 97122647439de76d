use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use folio::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            render_command(sub_matches).await?;
        }
        Some(("theme", sub_matches)) => {
            theme_command(sub_matches).await?;
        }
        _ => {
            build_cli().print_help()?;
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Log to stderr so that a rendered page on stdout stays clean
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a personal portfolio page from a JSON profile document")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Load the profile document and render the page")
                .arg(
                    Arg::new("site")
                        .short('s')
                        .long("site")
                        .value_name("DIR")
                        .help("Site root that profile and template paths are relative to")
                        .default_value("."),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Site config (defaults to <site>/folio.yaml when present)"),
                )
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .value_name("FILE")
                        .help("Page shell with {{ slot }} placeholders (overrides the config)"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write the page here instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or toggle the persisted theme")
                .arg(
                    Arg::new("action")
                        .value_name("ACTION")
                        .value_parser(["show", "toggle"])
                        .default_value("show"),
                )
                .arg(
                    Arg::new("site")
                        .short('s')
                        .long("site")
                        .value_name("DIR")
                        .help("Site root whose theme store to use")
                        .default_value("."),
                )
                .arg(
                    Arg::new("store")
                        .long("store")
                        .value_name("FILE")
                        .help("Theme store file (overrides the site config)"),
                ),
        )
}

async fn render_command(matches: &ArgMatches) -> Result<()> {
    let site_root = site_root(matches)?;
    let config = matches.get_one::<String>("config").map(PathBuf::from);
    let template = matches.get_one::<String>("template").map(PathBuf::from);

    let site = Site::open(&site_root, config.as_deref()).await?;
    let rendered = site.render_page_with_template(template.as_deref()).await?;

    match matches.get_one::<String>("output") {
        Some(output) => {
            write_page(output, &rendered.html).await?;
            eprintln!("✓ Page written to: {}", output);
        }
        None => print!("{}", rendered.html),
    }

    // The page is emitted either way; the exit status tells scripts whether it is complete
    if !rendered.outcome.is_rendered() {
        std::process::exit(2);
    }

    Ok(())
}

async fn write_page(output: &str, html: &str) -> Result<()> {
    tokio::fs::write(output, html)
        .await
        .with_context(|| format!("Failed to write page: {}", output))
}

async fn theme_command(matches: &ArgMatches) -> Result<()> {
    let site_root = site_root(matches)?;
    let site = Site::open(&site_root, None).await?;

    let store = match matches.get_one::<String>("store") {
        Some(path) => FileThemeStore::new(path),
        None => site.theme_store(),
    };
    let store_path = store.path().to_path_buf();

    let mut session = PageSession::open(store, site.config().default_theme).await;

    match matches.get_one::<String>("action").map(String::as_str) {
        Some("toggle") => {
            let theme = session.toggle_theme().await?;
            println!("Theme: {} (saved to {})", theme, store_path.display());
        }
        _ => {
            println!("Theme: {}", session.theme());
        }
    }

    Ok(())
}

fn site_root(matches: &ArgMatches) -> Result<PathBuf> {
    let root = matches
        .get_one::<String>("site")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if !Path::new(&root).is_dir() {
        anyhow::bail!("Site root '{}' is not a directory", root.display());
    }

    Ok(root)
}
