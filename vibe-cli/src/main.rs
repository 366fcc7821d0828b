use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use vibe_core::MemorySession;

mod infrastructure;
mod media;
mod render;
mod shell;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use shell::Shell;

const PROMPT: &str = "vibe> ";
const GUEST_PROMPT: &str = "vibe (guest)> ";
const GREETING: &str = "SocialVibe. Начните с `login <handle> \"<имя>\" [--bio \"...\"]`, список команд: `help`.";

#[derive(Debug, Parser)]
#[command(name = "vibe-cli", version, about = "SocialVibe в терминале")]
struct Cli {
    /// Выполнить команды из файла (по одной на строку) перед интерактивным режимом.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Не читать команды из stdin после скрипта.
    #[arg(long)]
    no_interactive: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let mut shell = Shell::new(MemorySession::in_memory(), settings.max_image_bytes);
    info!(max_image_bytes = settings.max_image_bytes, "session started");

    if let Some(path) = &cli.script {
        let script = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("не удалось прочитать скрипт {}", path.display()))?;
        for line in script_lines(&script) {
            if !execute(&mut shell, line).await? {
                return Ok(());
            }
        }
    }

    if cli.no_interactive {
        return Ok(());
    }

    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("{GREETING}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            let prompt = if shell.is_logged_in() {
                PROMPT
            } else {
                GUEST_PROMPT
            };
            print!("{prompt}");
            std::io::stdout().flush().context("не удалось вывести приглашение")?;
        }
        let Some(line) = lines
            .next_line()
            .await
            .context("не удалось прочитать stdin")?
        else {
            break;
        };
        if !execute(&mut shell, &line).await? {
            break;
        }
    }

    Ok(())
}

/// Возвращает `false`, когда оболочку пора закрыть.
async fn execute(shell: &mut Shell, line: &str) -> Result<bool> {
    let reply = shell.execute(line).await;
    if !reply.output.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(reply.output.as_bytes())
            .context("не удалось записать в stdout")?;
        stdout.flush().context("не удалось записать в stdout")?;
    }
    Ok(!reply.quit)
}

fn script_lines(script: &str) -> impl Iterator<Item = &str> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
