use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use quizr::bank::loader::load_bank_sync;
use quizr::bank::{BankLoader, BankSource};
use quizr::config::{self, ConfigResult};
use quizr::navigation::QuizConfig;
use quizr::App;

/// Terminal multiple-choice quiz runner
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal multiple-choice quiz runner for JSON question banks"
)]
struct Args {
    /// Question bank: a JSON file path or an http(s) URL [default: questions.json]
    source: Option<String>,

    /// Open a quiz directly, e.g. "quiz?mode=all&subject=Networking"
    #[arg(long, value_name = "DESCRIPTOR")]
    quiz: Option<String>,

    /// Fixed shuffle seed for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Print each topic with its question count and exit
    #[arg(long)]
    list_topics: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/quizr-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early so CLI flags can override it
    let config_result = config::load_config();

    let args = Args::parse();

    let bank_config = &config_result.config.bank;
    let source = BankSource::parse(args.source.as_deref().unwrap_or(&bank_config.source));
    let timeout = bank_config.timeout();
    let seed = args.seed.or(config_result.config.quiz.seed);

    if args.list_topics {
        let bank = load_bank_sync(&source, timeout)?;
        for (topic, count) in bank.topic_counts() {
            println!("{} ({} Qs)", topic, count);
        }
        return Ok(());
    }

    // Reject a bad descriptor before taking over the terminal
    if let Some(descriptor) = &args.quiz {
        QuizConfig::from_url(descriptor)?;
    }

    let terminal = init_terminal()?;

    let loader = BankLoader::spawn_load(source, timeout);
    let app = App::new_with_loader(loader, args.quiz, seed);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== QUIZR DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/quizr-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== QUIZR DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render to pick up the bank from the background thread
        app.poll_loader();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
