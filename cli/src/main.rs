//! CLI entrypoint for fairfinder
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fairfinder_application::{
    FetchExhibitionsUseCase, GenerationGateway, GenerationLogger, NoGenerationLogger, NoProgress,
    ResultCache, ResultsView, SearchProgressNotifier, SearchSession,
};
use fairfinder_domain::{OutputFormat, Severity};
use fairfinder_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonFileStore, JsonlGenerationLogger,
};
use fairfinder_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Subscriber, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref());

    if !config.output.color {
        colored::control::set_override(false);
    }

    if let Some(target) = cli.list {
        print!("{}", ConsoleFormatter::format_catalog(&target.catalog()));
        return Ok(ExitCode::SUCCESS);
    }

    check_config(&config)?;

    let cache = open_cache(&config);

    if cli.clear_cache {
        if let Some(cache) = &cache {
            cache.clear().context("Failed to clear the result cache")?;
        }
        println!("Result cache cleared.");
        return Ok(ExitCode::SUCCESS);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_config(&config.gemini)?);

    let mut params = config.search.to_search_params();
    if let Some(count) = cli.count {
        if count == 0 {
            bail!("--count must be at least 1");
        }
        params = params.with_target_count(count);
    }

    let fetch = FetchExhibitionsUseCase::new(gateway.clone())
        .with_params(params)
        .with_logger(transcript_logger(&config));
    let mut session = SearchSession::new(fetch, cache);

    if cli.cached {
        if !session.restore() {
            print!("{}", ConsoleFormatter::format_welcome());
            return Ok(ExitCode::SUCCESS);
        }
        print!("{}", render(&mut session, format));
        return Ok(ExitCode::SUCCESS);
    }

    if !gateway.has_credential() {
        eprint!(
            "{}",
            ConsoleFormatter::format_error(&format!(
                "No API key found. Set ${} (or $GEMINI_API_KEY), or gemini.api_key in the config file.",
                config.gemini.api_key_env
            ))
        );
        return Ok(ExitCode::from(2));
    }

    info!("Starting search with model {}", gateway.model_name());

    let input = cli.apply_filter_args(
        config
            .search
            .filter_builder(chrono::Local::now().date_naive()),
    );

    let progress: Box<dyn SearchProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match session.submit(input, progress.as_ref()).await {
        Ok(_) => {
            print!("{}", render(&mut session, format));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!("Search failed: {}", e);
            let message = session
                .last_error()
                .map(str::to_string)
                .unwrap_or_else(|| e.user_message());
            eprint!("{}", ConsoleFormatter::format_error(&message));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides `-v`. With `log_dir` set, events also go to a
/// daily-rolling file there.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (subscriber, guard) = log_subscriber(filter, std::io::stderr, log_dir);
    subscriber.init();
    guard
}

/// Console layer plus, when `log_dir` is usable, a plain-text file layer
fn log_subscriber<W>(
    filter: EnvFilter,
    console: W,
    log_dir: Option<&Path>,
) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_writer = log_dir.and_then(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(dir, "fairfinder.log");
            Some(tracing_appender::non_blocking(appender))
        }
        Err(e) => {
            eprintln!("Could not create log directory {}: {}", dir.display(), e);
            None
        }
    });

    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console)
        .with_target(false);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer);

    (subscriber, guard)
}

/// Print config warnings; stop on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn open_cache(config: &FileConfig) -> Option<ResultCache> {
    if !config.cache.enabled {
        return None;
    }
    let path = config.cache.resolved_path()?;
    info!("Result cache at {}", path.display());
    Some(ResultCache::new(Arc::new(JsonFileStore::new(path))))
}

fn transcript_logger(config: &FileConfig) -> Arc<dyn GenerationLogger> {
    config
        .logging
        .transcript_dir
        .as_ref()
        .and_then(JsonlGenerationLogger::in_dir)
        .map(|logger| {
            info!("Writing generation transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn GenerationLogger>
        })
        .unwrap_or_else(|| Arc::new(NoGenerationLogger))
}

fn render<G: GenerationGateway + 'static>(
    session: &mut SearchSession<G>,
    format: OutputFormat,
) -> String {
    if format == OutputFormat::Charts {
        session.set_view(ResultsView::Charts);
    }

    if format == OutputFormat::Json {
        return ConsoleFormatter::format_json(session.results());
    }

    let mut output = String::new();
    if let Some(filter) = session.filter() {
        output.push_str(&ConsoleFormatter::format_summary(
            filter,
            session.results().len(),
        ));
    }
    output.push_str(&match session.view() {
        ResultsView::Results => ConsoleFormatter::format_cards(session.results()),
        ResultsView::Charts => ConsoleFormatter::format_charts(session.results()),
    });
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_log_dir_keeps_console_output() {
        let dir = tempfile::tempdir().unwrap();
        let console = SharedBuffer::default();
        let writer = console.clone();

        let (subscriber, guard) =
            log_subscriber(EnvFilter::new("warn"), move || writer.clone(), Some(dir.path()));
        assert!(guard.is_some());

        tracing::subscriber::with_default(subscriber, || {
            warn!("cache file unreadable");
            info!("filtered out");
        });
        // Dropping the guard flushes the file writer
        drop(guard);

        let console = console.contents();
        assert!(console.contains("cache file unreadable"));
        assert!(!console.contains("filtered out"));

        let logged: String = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        assert!(logged.contains("cache file unreadable"));
    }

    #[test]
    fn test_no_log_dir_means_no_guard() {
        let (_subscriber, guard) = log_subscriber(EnvFilter::new("warn"), std::io::sink, None);
        assert!(guard.is_none());
    }
}
