use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use brandkit::cli::{Args, Command};
use brandkit::config::Config;
use brandkit::copywriter::{improve_copy, suggest_content};
use brandkit::pipeline::extract::extract_from_path;
use brandkit::preview::render_swatch;
use brandkit::safety::check_url;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = load_config(&args)?;

    match args.command {
        Command::Brand {
            ref image,
            max_bytes,
            preview,
        } => {
            let mut extract = config.extract.clone();
            if let Some(max) = max_bytes {
                extract.max_input_bytes = max;
            }
            let brand = extract_from_path(image, &extract).map_err(|e| {
                let hint = e.user_message();
                anyhow::Error::new(e).context(hint)
            })?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&brand)?);
            } else {
                println!("color = {}", brand.color);
                println!("tint = {}", brand.tint);
                println!("gradient = {}", brand.gradient);
            }
            if preview {
                eprint!("{}", render_swatch(&brand));
            }
        }
        Command::CheckUrl { ref text } => {
            let report = check_url(text);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if !report.is_url {
                println!("not a URL");
            } else if report.ok {
                println!("ok");
            } else {
                println!("warning: {}", report.labels().join(", "));
            }
        }
        Command::Suggest {
            industry,
            tone,
            variant,
        } => {
            let industry = industry.unwrap_or(config.copy.industry);
            let tone = tone.unwrap_or(config.copy.tone);
            print_text(args.json, &suggest_content(industry, tone, variant));
        }
        Command::Improve { ref text, tone } => {
            let tone = tone.unwrap_or(config.copy.tone);
            print_text(args.json, &improve_copy(text, tone));
        }
    }

    Ok(())
}

fn print_text(json: bool, text: &str) {
    if json {
        println!("{}", serde_json::json!({ "text": text }));
    } else {
        println!("{text}");
    }
}
