use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frame_delta_config::Config;
use frame_delta_engine::{FramePlayer, WrapOptions, io, strip_line_wraps, with_data_uri_prefix};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "frame-delta", version, about = "Apply frame patches and rewrap base64 payloads")]
struct Cli {
    /// Config file to use instead of ~/.config/frame-delta/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON patch to a base file
    ///
    /// Line wraps in the base are removed first, since patch offsets address
    /// the unwrapped text.
    Apply {
        base: PathBuf,
        patch: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-chunk a base64 payload into fixed-width lines after an unwrapped prefix
    Rewrap {
        input: PathBuf,
        #[arg(long)]
        offset: Option<usize>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rebuild one frame of a diff-encoded frame sequence
    ///
    /// Line wraps in stored checkpoints are removed before replaying.
    Replay {
        frames: PathBuf,
        frame: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Turn a base64 payload into an image data URI
    Prefix {
        /// Image format, e.g. svg or png
        format: String,
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    fn output(&self) -> Option<&Path> {
        match self {
            Command::Apply { output, .. }
            | Command::Rewrap { output, .. }
            | Command::Replay { output, .. }
            | Command::Prefix { output, .. } => output.as_deref(),
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);

    match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::debug!("Using config file {}", config_path.display());
            Ok(config)
        }
        Ok(None) if explicit.is_some() => {
            anyhow::bail!("Config file '{}' does not exist", config_path.display())
        }
        Ok(None) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Apply { base, patch, .. } => {
            let base_path = config.resolve(base);
            let patch_path = config.resolve(patch);
            let base = strip_line_wraps(&io::read_text(&base_path)?);
            let patch = io::read_patch(&patch_path)?;
            log::info!(
                "Applying {} edits from {} to {}",
                patch.len(),
                patch_path.display(),
                base_path.display()
            );
            patch
                .apply_to(&base)
                .with_context(|| format!("Failed to apply {}", patch_path.display()))
        }
        Command::Rewrap {
            input,
            offset,
            width,
            ..
        } => {
            let defaults = config.wrap_options();
            let options = WrapOptions {
                offset: offset.unwrap_or(defaults.offset),
                width: width.unwrap_or(defaults.width),
            };
            let doc = io::read_text(&config.resolve(input))?;
            Ok(options.rewrap(&doc)?)
        }
        Command::Replay { frames, frame, .. } => {
            let frames_path = config.resolve(frames);
            let mut sequence = io::read_frames(&frames_path)?;
            sequence.strip_line_wraps();
            log::info!(
                "Replaying frame {frame} of {} from {}",
                sequence.frame_count(),
                frames_path.display()
            );
            let mut player = FramePlayer::new(sequence)?;
            Ok(player.set_frame(*frame)?.to_string())
        }
        Command::Prefix { format, input, .. } => {
            let payload = io::read_text(&config.resolve(input))?;
            Ok(with_data_uri_prefix(format, payload.trim_end()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let result = run(&cli.command, &config)?;

    match cli.command.output() {
        Some(path) => {
            io::write_text(path, &result)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{result}"),
    }

    Ok(())
}
