use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;
use dtfmt::catalog;
use dtfmt::config::Config;
use dtfmt::{logger, registry, stamp};
use serde::Serialize;
use std::path::PathBuf;

/// Print the current moment through a catalog template (e.g. dmy.slashed)
/// or a raw strftime template (e.g. '%Y-%m-%d').
#[derive(Debug, Parser)]
#[command(name = "dtfmt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stamp the current moment with a strftime template")]
struct Cli {
    /// Read configuration from PATH
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Render the current date instead of date and time
    #[arg(long)]
    date: bool,

    /// List every catalog template with a sample
    #[arg(long)]
    list: bool,

    /// With --list, print JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Write the default configuration file (to PATH if given)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    init_config: Option<Option<PathBuf>>,

    /// Catalog name or raw strftime template
    template: Option<String>,
}

impl Cli {
    /// Template to stamp with: the argument, else the configured one.
    ///
    /// With `--date` and no argument the locale date is used, since the
    /// configured template usually carries time fields.
    fn template<'a>(&'a self, config: &'a Config) -> &'a str {
        match &self.template {
            Some(name) => registry::resolve(name),
            None if self.date => catalog::LOCALE_DT,
            None => config.stamp_template(),
        }
    }

    fn stamp(&self, config: &Config) -> Result<String> {
        let template = self.template(config);
        log::debug!("Stamping with template {:?}", template);

        let text = if self.date {
            stamp::today_text_with(template)?
        } else {
            stamp::now_text_with(template)?
        };
        Ok(text)
    }
}

#[derive(Serialize)]
struct Listing {
    rendered_at: DateTime<Local>,
    entries: Vec<ListedEntry>,
}

#[derive(Serialize)]
struct ListedEntry {
    name: &'static str,
    template: &'static str,
    sample: String,
}

fn listing() -> Result<Listing> {
    let now = stamp::current_date_time();
    let entries = registry::entries()
        .iter()
        .map(|e| -> Result<ListedEntry> {
            Ok(ListedEntry {
                name: e.name,
                template: e.template,
                sample: stamp::render(&now, e.template)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Listing {
        rendered_at: now,
        entries,
    })
}

fn list(json: bool) -> Result<()> {
    let listing = listing()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for e in &listing.entries {
            println!("{:<34} {:<20} {}", e.name, e.template, e.sample);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.init_config {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    if cli.list {
        return list(cli.json);
    }

    println!("{}", cli.stamp(&config)?);
    Ok(())
}
