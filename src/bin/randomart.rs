use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use randomart::{NodeStore, RenderConfig, Session, default_grammar, save_png};

#[derive(Parser, Debug)]
#[command(name = "randomart", version)]
struct Cli {
    /// Log generation and render details.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a tree from the built-in grammar and render it as a PNG.
    Render(RenderArgs),
    /// Generate a tree and print it without rendering.
    Tree(GenerateArgs),
    /// Print the built-in grammar.
    Grammar,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Depth budget for grammar expansion.
    #[arg(long)]
    depth: Option<u32>,

    /// Branch draws per rule expansion.
    #[arg(long)]
    attempts: Option<usize>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the generated tree to stdout before rendering.
    #[arg(long)]
    print_tree: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tree(args) => cmd_tree(args),
        Command::Grammar => cmd_grammar(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(attempts) = args.attempts {
        config.max_attempts = attempts;
    }
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.generate)?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(out) = args.out {
        config.output = out;
    }

    let mut session =
        Session::generate(&config).context("the generation process could not terminate")?;
    if args.print_tree {
        println!("{}", session.tree());
    }

    let (frame, stats) = session.render(&config).context("render pixels")?;
    tracing::debug!(
        pixels = stats.pixels,
        peak_nodes_per_pixel = stats.peak_nodes_per_pixel,
        "render stats"
    );

    save_png(&frame, &config.output)
        .with_context(|| format!("could not save image '{}'", config.output.display()))?;
    Ok(())
}

fn cmd_tree(args: GenerateArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let session =
        Session::generate(&config).context("the generation process could not terminate")?;
    println!("{}", session.tree());
    Ok(())
}

fn cmd_grammar() -> anyhow::Result<()> {
    let mut store = NodeStore::new();
    let grammar = default_grammar(&mut store).context("build built-in grammar")?;
    print!("{}", grammar.display(&store));
    Ok(())
}
