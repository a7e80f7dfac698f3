use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "admark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a branded PNG from a source image and branding options.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Source image (http(s) URL or local path).
    #[arg(long)]
    image: String,

    /// Branding options JSON. When omitted, the built-in campaign profile
    /// is used.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Brand font file (.ttf/.otf); overrides the options' font_path.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Image load timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,
}

/// The campaign's default branding. This is application content, kept out of
/// the engine on purpose; an options JSON replaces it wholesale.
fn default_profile() -> admark::BrandingOptions {
    admark::BrandingOptions {
        title: "Personalized Renovations\nFor Your Unique\nLifestyle".to_owned(),
        subtitle: "Where quality meets innovation\nin home renovation".to_owned(),
        website_text: Some("www.adverlead-renovations.com".to_owned()),
        ..admark::BrandingOptions::default()
    }
}

fn read_options(path: &Path) -> anyhow::Result<admark::BrandingOptions> {
    let f = File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
    let r = BufReader::new(f);
    let options: admark::BrandingOptions =
        serde_json::from_reader(r).with_context(|| "parse options JSON")?;
    Ok(options)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args).await,
    }
}

async fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut options = match &args.options {
        Some(path) => read_options(path)?,
        None => default_profile(),
    };
    if let Some(font) = args.font {
        options.font_path = Some(font);
    }

    let source = admark::AssetRef::parse(&args.image)?;
    let request = admark::CompositionRequest::new(source, options);

    let compositor = admark::Compositor::new(std::time::Duration::from_millis(args.timeout_ms))?;
    let composed = compositor.composite(&request).await?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(&args.out, &composed.png)
        .with_context(|| format!("write output '{}'", args.out.display()))?;

    println!(
        "composed {}x{} -> {}",
        composed.width,
        composed.height,
        args.out.display()
    );
    Ok(())
}
