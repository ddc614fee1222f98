use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use moodbot_core::{ConversationController, MoodbotConfig, SubmitOutcome};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use yansi::Paint;

mod render;

use render::{MarkdownRenderer, PlainRenderer, Renderer};

#[derive(Parser, Debug)]
#[clap(
    name = "moodbot",
    version = "0.1.0",
    about = "MoodBot - a Gemini-backed chat companion for the terminal"
)]
struct Cli {
    #[clap(
        long,
        short,
        default_value = "moodbot.yaml",
        help = "Path to the YAML configuration file"
    )]
    config: String,

    #[clap(long, help = "Override the configured model")]
    model: Option<String>,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Disable markdown styling in answers")]
    plain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut config = if std::path::Path::new(&cli.config).exists() {
        log::info!("Loading configuration from file: {}", cli.config);
        MoodbotConfig::from_file(&cli.config)?
    } else {
        log::info!("No configuration file at {}, using defaults", cli.config);
        MoodbotConfig::default()
    };
    if let Some(model) = cli.model {
        config.model = model;
    }

    let client = config.into_client()?;
    let controller = Arc::new(ConversationController::new(Arc::new(client)));

    let renderer: Box<dyn Renderer> = if cli.plain {
        Box::new(PlainRenderer)
    } else {
        Box::new(MarkdownRenderer)
    };

    run_chat_loop(controller, renderer.as_ref()).await
}

async fn run_chat_loop(
    controller: Arc<ConversationController>,
    renderer: &dyn Renderer,
) -> Result<()> {
    if controller.conversation().is_empty() {
        print_welcome();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        controller.update_draft(&line);

        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        println!("{}", Paint::new("Thinking...").dimmed());

        match controller.submit_draft().await {
            SubmitOutcome::Answered | SubmitOutcome::FellBack => {
                if let Some(answer) = controller.conversation().last() {
                    println!("{}\n", renderer.render(&answer.content));
                }
            }
            SubmitOutcome::Busy => {
                // The loop awaits each turn, so this only happens if a
                // second front end shares the controller.
                log::warn!("submit refused while a request is in flight");
            }
            SubmitOutcome::EmptyInput => {}
        }

        prompt()?;
    }

    println!();
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{} ", Paint::new("You:").bold());
    std::io::stdout().flush()?;
    Ok(())
}

fn print_welcome() {
    println!("{}", Paint::new("Welcome to MoodBot!").bold());
    println!("Your personal companion for emotional wellbeing and more.");
    println!("Make me your friend and discuss whatever comes to your mind.");
    println!();
}
