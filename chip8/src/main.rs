#![forbid(unsafe_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use chipvm_core::constants::DEFAULT_CYCLES_PER_FRAME;
use chipvm_core::Chip8;

#[cfg(feature = "sdl")]
mod keymap;
mod run;
#[cfg(feature = "sdl")]
mod sdl;
mod terminal;

use crate::run::{Config, Frontend};

#[derive(Parser)]
#[command(version, about)]
struct Opt {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Dump registers, stack and keys after every frame
    #[arg(long)]
    debug: bool,

    /// Instructions executed per 60Hz frame
    #[arg(long, default_value_t = DEFAULT_CYCLES_PER_FRAME)]
    cycles: u32,

    /// Size of one Chip-8 pixel in the window
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Draw to the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Increase the level of verbosity. Can be used multiple times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Use JSON output for log messages
    #[arg(short, long)]
    json: bool,
}

impl Opt {
    const fn log_filter(&self) -> &'static str {
        match self.verbose {
            // the per-frame dump is logged at debug from the host loop
            0 if self.debug => "chipvm::run=debug,info",
            0 => "info",
            1 => "chipvm_core=debug,chipvm=debug,info",
            2 => "chipvm_core=trace,chipvm=trace,info",
            3..=u8::MAX => "trace",
        }
    }

    fn filter_layer(&self) -> EnvFilter {
        // Parse log level from env
        EnvFilter::try_from_default_env()
            // or infer from args
            .or_else(|_| EnvFilter::try_new(self.log_filter()))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn frontend(&self) -> Result<Box<dyn Frontend>> {
        if !self.headless {
            if let Some(window) = window(self.scale)? {
                return Ok(window);
            }
        }
        Ok(Box::new(terminal::Terminal::new()))
    }
}

#[cfg(feature = "sdl")]
fn window(scale: u32) -> Result<Option<Box<dyn Frontend>>> {
    Ok(Some(Box::new(sdl::Sdl::new(scale)?)))
}

#[cfg(not(feature = "sdl"))]
fn window(_scale: u32) -> Result<Option<Box<dyn Frontend>>> {
    tracing::warn!("built without the `sdl` feature, drawing to the terminal instead");
    Ok(None)
}

fn start(opt: &Opt) -> Result<u64> {
    let mut chip8 = match opt.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&opt.rom)
        .with_context(|| format!("unable to open ROM {}", opt.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom_from(&mut reader)
        .with_context(|| format!("unable to load ROM {}", opt.rom.display()))?;

    let mut frontend = opt.frontend()?;
    let config = Config {
        cycles_per_frame: opt.cycles,
        frame_limit: opt.frames,
        debug: opt.debug,
    };
    run::run(&mut chip8, frontend.as_mut(), &config)
}

fn main() {
    // First, parse the arguments
    let opt = Opt::parse();

    // Then, setup the tracing formatter for logging; stdout belongs to the terminal front end
    let registry = tracing_subscriber::Registry::default().with(opt.filter_layer());

    if opt.json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        registry.with(json_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).init();
    }

    match start(&opt) {
        Ok(frames) => info!(frames, "stopped"),
        Err(e) => {
            error!("{:#}", e);
            exit(1);
        }
    }
}
