mod preview;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tessel_core::{VDomArena, el};
use tessel_ssr::{PageOptions, render_page, render_to_string};
use tessel_widgets::{COUNTER_SCRIPT, CounterButton, CounterOptions, Icon};

#[derive(Parser)]
#[command(name = "tessel")]
#[command(about = "Render Tessel widgets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a counter button as HTML
    Render {
        #[command(flatten)]
        counter: CounterArgs,
        /// Wrap the widget in a complete page with its dependencies
        #[arg(long)]
        page: bool,
    },
    /// Print the client script shared by all counter buttons
    Asset,
    /// Serve a page with the counter button for manual testing
    Preview {
        #[command(flatten)]
        counter: CounterArgs,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Args, Debug, Clone)]
struct CounterArgs {
    /// Input id of the counter
    #[arg(long)]
    id: String,
    /// JSON file with counter options; flags below override it
    #[arg(long)]
    options: Option<PathBuf>,
    #[arg(long)]
    label: Option<String>,
    #[arg(long)]
    icon: Option<String>,
    #[arg(long)]
    value: Option<u64>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    size: Option<String>,
    #[arg(long)]
    separator: Option<String>,
    /// Page title
    #[arg(long)]
    title: Option<String>,
}

impl CounterArgs {
    fn counter(&self) -> Result<CounterButton> {
        let mut options = match &self.options {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<CounterOptions>(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => CounterOptions::default(),
        };

        if let Some(label) = &self.label {
            options.label = label.clone();
        }
        if let Some(icon) = &self.icon {
            options.icon = Some(Icon::new(icon.clone()));
        }
        if let Some(value) = self.value {
            options.value = value;
        }
        if let Some(color) = &self.color {
            options.color = color.clone();
        }
        if let Some(size) = &self.size {
            options.size = size.clone();
        }
        if let Some(separator) = &self.separator {
            options.separator = separator.clone();
        }
        Ok(CounterButton::with_options(self.id.clone(), options))
    }

    fn page_options(&self) -> PageOptions {
        let mut page = PageOptions::default();
        if let Some(title) = &self.title {
            page.title = title.clone();
        }
        page
    }
}

fn render(args: &CounterArgs, page: bool) -> Result<String> {
    let counter = args.counter()?;
    let mut arena = VDomArena::new();
    if page {
        let root = el("div").class("ui container").build(&mut arena);
        counter.mount(&mut arena, root)?;
        Ok(render_page(&arena, root, &args.page_options())?)
    } else {
        let handle = counter.render(&mut arena);
        Ok(render_to_string(&arena, handle.container)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render { counter, page } => {
            println!("{}", render(counter, *page)?);
        }
        Commands::Asset => {
            print!("{}", COUNTER_SCRIPT);
        }
        Commands::Preview { counter, port } => {
            let page = render(counter, true)?;
            preview::serve(page, *port).await?;
        }
    }

    Ok(())
}
