//! Binary entry point for `interview-ace`.
//!
//! This module provides the command-line interface for interview-ace with options
//! for the settings file path and logging verbosity. It resolves the defaults and
//! prints them as JSON.

use clap::{Parser, Subcommand, ValueEnum};
use interview_ace::{base::config::Settings, defaults::Defaults, prelude::*};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use serde_json::{Value, json};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Interview-ace: defaults for an interview-practice voice bot.
///
/// Settings can come from `config.toml` or `INTERVIEW_ACE_*` environment variables.
/// Credentials are read from `GEMINI_API_KEY` and `DAILY_API_KEY`.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the settings file path (optional).
    ///
    /// By default, the settings are read from `.hidden/config.toml`
    /// in the current directory, if it exists.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Export spans over OTLP/HTTP in addition to logging them.
    #[arg(long)]
    otlp: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print resolved defaults as JSON.
    Show {
        /// Which part of the defaults to print.
        #[arg(value_enum, default_value_t = Part::All)]
        part: Part,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Part {
    All,
    Seed,
    BotConfig,
    Keys,
}

/// Main entry point for the interview-ace binary.
///
/// Sets up logging based on verbosity, loads settings, and prints the defaults.
fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.
    //
    // Logs go to stderr so stdout stays valid JSON.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("interview-ace");

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stderr).init();

    let settings = Settings::load(args.config.as_deref())?;
    let defaults = interview_ace::start(&settings);

    let part = match args.command {
        Some(Command::Show { part }) => part,
        None => Part::All,
    };

    println!("{}", serde_json::to_string_pretty(&render(&defaults, part)?)?);

    Ok(())
}

/// Render the requested part, never exposing credential values.
fn render(defaults: &Defaults, part: Part) -> Res<Value> {
    let value = match part {
        Part::All => json!({
            "seed": defaults.seed,
            "bot_config": defaults.bot_config,
            "keys": defaults.api_keys.redacted(),
        }),
        Part::Seed => serde_json::to_value(&defaults.seed)?,
        Part::BotConfig => serde_json::to_value(&defaults.bot_config)?,
        Part::Keys => serde_json::to_value(defaults.api_keys.redacted())?,
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_ace::service::env::EnvSource;

    fn get_defaults() -> Defaults {
        let env = EnvSource::from_pairs([("GEMINI_API_KEY", "g-secret"), ("DAILY_API_KEY", "")]);

        Defaults::from_parts(&Settings::default(), &*env)
    }

    #[test]
    fn keys_render_as_present_or_null() {
        let value = render(&get_defaults(), Part::Keys).unwrap();

        assert_eq!(value, json!({ "gemini": "present", "daily": null }));
    }

    #[test]
    fn all_renders_every_part_without_credentials() {
        let defaults = get_defaults();
        let value = render(&defaults, Part::All).unwrap();

        assert_eq!(value["keys"], json!({ "gemini": "present", "daily": null }));
        assert_eq!(value["seed"], serde_json::to_value(&defaults.seed).unwrap());
        assert_eq!(value["bot_config"], serde_json::to_value(&defaults.bot_config).unwrap());
        assert!(!value.to_string().contains("g-secret"));
    }

    #[test]
    fn single_parts_render_alone() {
        let defaults = get_defaults();

        assert_eq!(render(&defaults, Part::Seed).unwrap()[0]["role"], "system");
        assert_eq!(render(&defaults, Part::BotConfig).unwrap()[0]["service"], "vad");
    }
}
