use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lissajous", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation as a GIF.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the effective configuration as JSON.
    PrintConfig(ConfigArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Do not print per-frame progress.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

/// Every field overrides the config file (or built-in default) only when given.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file to start from.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the output GIF.
    #[arg(long, alias = "out-path")]
    outfile: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long)]
    nframes: Option<u64>,

    /// Radius of the image in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Delay between frames, in hundredths of a second.
    #[arg(long)]
    delay: Option<u16>,

    /// Length of the curve's stroke, in full turns.
    #[arg(long)]
    cycles: Option<f64>,

    /// X frequency.
    #[arg(long, allow_negative_numbers = true)]
    xfreq: Option<f64>,

    /// X frequency increment per frame.
    #[arg(long = "xfreq-inc", alias = "xfreq_inc", allow_negative_numbers = true)]
    xfreq_inc: Option<f64>,

    /// Y frequency.
    #[arg(long, allow_negative_numbers = true)]
    yfreq: Option<f64>,

    /// Y frequency increment per frame.
    #[arg(long = "yfreq-inc", alias = "yfreq_inc", allow_negative_numbers = true)]
    yfreq_inc: Option<f64>,

    /// X phase.
    #[arg(long, allow_negative_numbers = true)]
    xphase: Option<f64>,

    /// X phase increment per frame.
    #[arg(long = "xphase-inc", alias = "xphase_inc", allow_negative_numbers = true)]
    xphase_inc: Option<f64>,

    /// Y phase.
    #[arg(long, allow_negative_numbers = true)]
    yphase: Option<f64>,

    /// Y phase increment per frame.
    #[arg(long = "yphase-inc", alias = "yphase_inc", allow_negative_numbers = true)]
    yphase_inc: Option<f64>,

    /// Angular resolution.
    #[arg(long)]
    res: Option<f64>,
}

impl ConfigArgs {
    fn resolve(&self) -> anyhow::Result<lissajous::RenderConfig> {
        let mut cfg = match &self.config {
            Some(path) => lissajous::RenderConfig::from_json_path(path)?,
            None => lissajous::RenderConfig::default(),
        };

        if let Some(v) = &self.outfile {
            cfg.out_path = v.clone();
        }
        override_with(&mut cfg.nframes, self.nframes);
        override_with(&mut cfg.size, self.size);
        override_with(&mut cfg.delay, self.delay);
        override_with(&mut cfg.cycles, self.cycles);
        override_with(&mut cfg.xfreq, self.xfreq);
        override_with(&mut cfg.xfreq_inc, self.xfreq_inc);
        override_with(&mut cfg.yfreq, self.yfreq);
        override_with(&mut cfg.yfreq_inc, self.yfreq_inc);
        override_with(&mut cfg.xphase, self.xphase);
        override_with(&mut cfg.xphase_inc, self.xphase_inc);
        override_with(&mut cfg.yphase, self.yphase);
        override_with(&mut cfg.yphase_inc, self.yphase_inc);
        override_with(&mut cfg.res, self.res);

        cfg.validate().context("invalid render configuration")?;
        Ok(cfg)
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::PrintConfig(args) => cmd_print_config(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let threading = lissajous::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let quiet = args.quiet;
    let mut report = |done: u64, total: u64| {
        if !quiet {
            eprint!("\rrendered frame {done} of {total}");
            if done == total {
                eprintln!();
            }
        }
    };

    let stats = lissajous::render_to_gif(&cfg, &threading, &mut report)
        .with_context(|| format!("render gif '{}'", cfg.out_path.display()))?;

    tracing::info!(
        frames = stats.frames_rendered,
        samples_per_frame = stats.samples_per_frame,
        "render finished"
    );
    eprintln!("wrote {}", cfg.out_path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let frame = lissajous::render_single_frame(&cfg, lissajous::FrameIndex(args.index))?;
    lissajous::save_frame_png(&frame, &lissajous::Palette::gradient(), &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_print_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = args.resolve()?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
