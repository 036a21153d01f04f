//! Scan Camera CLI
//!
//! Command-line interface for exercising the camera session manager
//! against a simulated camera platform.

use clap::{Parser, ValueEnum};
use scan_camera::{
    geometry::DeviceOrientation,
    hardware::MockHardware,
    metrics::MetricsRegistry,
    session::{CameraSessionManager, CameraSlot, FileConfig, FlashMode, TorchMode},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "scan-camera", version, about = "Simulate a barcode scanner camera session")]
struct Args {
    /// TOML file describing the session and simulated cameras.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Device orientation in quarter turns (0-3).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=3))]
    orientation: Option<u32>,

    /// Camera to acquire.
    #[arg(short, long, value_enum, default_value_t = SlotArg::Back)]
    slot: SlotArg,

    /// Torch mode to apply after acquiring.
    #[arg(long, value_enum)]
    torch: Option<TorchArg>,

    /// Flash mode to apply after acquiring.
    #[arg(long, value_enum)]
    flash: Option<FlashArg>,

    /// Print Prometheus metrics before exiting.
    #[arg(long)]
    metrics: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SlotArg {
    Front,
    Back,
}

impl From<SlotArg> for CameraSlot {
    fn from(arg: SlotArg) -> Self {
        match arg {
            SlotArg::Front => CameraSlot::Front,
            SlotArg::Back => CameraSlot::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TorchArg {
    On,
    Off,
}

impl From<TorchArg> for TorchMode {
    fn from(arg: TorchArg) -> Self {
        match arg {
            TorchArg::On => TorchMode::On,
            TorchArg::Off => TorchMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlashArg {
    Auto,
    On,
    Off,
}

impl From<FlashArg> for FlashMode {
    fn from(arg: FlashArg) -> Self {
        match arg {
            FlashArg::Auto => FlashMode::Auto,
            FlashArg::On => FlashMode::On,
            FlashArg::Off => FlashMode::Off,
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Scan Camera v{}", scan_camera::VERSION);

    let config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let hardware = MockHardware::new(config.simulator.cameras.clone());
    let mut manager = CameraSessionManager::new(hardware, &config.session);
    let slot = CameraSlot::from(args.slot);

    if let Err(e) = manager.acquire_camera(slot) {
        eprintln!("Failed to acquire {} camera: {}", slot, e);
        std::process::exit(1);
    }

    if let Some(turns) = args.orientation {
        match DeviceOrientation::from_quarter_turns(turns) {
            Ok(orientation) => {
                if let Err(e) = manager.set_actual_device_orientation(orientation) {
                    warn!("Orientation change not fully applied: {}", e);
                }
            }
            Err(e) => warn!("Ignoring orientation: {}", e),
        }
    }

    if let Some(torch) = args.torch {
        match manager.set_torch_mode(slot, torch.into()) {
            Ok(true) => info!("Torch mode applied"),
            Ok(false) => warn!("Torch mode not supported by {} camera", slot),
            Err(e) => warn!("Torch mode failed: {}", e),
        }
    }

    if let Some(flash) = args.flash {
        match manager.set_flash_mode(slot, flash.into()) {
            Ok(true) => info!("Flash mode applied"),
            Ok(false) => warn!("Flash mode not supported by {} camera", slot),
            Err(e) => warn!("Flash mode failed: {}", e),
        }
    }

    if let Some(descriptor) = manager.descriptor(slot) {
        println!(
            "{} camera: index={} sensor={}° rotation={}° preview={}x{} orientation={}",
            slot,
            descriptor.index,
            descriptor.native_orientation,
            descriptor.rotation,
            manager.preview_width(slot),
            manager.preview_height(slot),
            manager.actual_device_orientation(),
        );
    }
    if !manager.barcode_types().is_empty() {
        println!("barcode types: {}", manager.barcode_types().join(", "));
    }

    if args.metrics {
        match MetricsRegistry::new() {
            Ok(registry) => {
                registry.update(&manager.stats());
                match registry.encode() {
                    Ok(text) => print!("{}", text),
                    Err(e) => warn!("Failed to encode metrics: {}", e),
                }
            }
            Err(e) => warn!("Failed to create metrics registry: {}", e),
        }
    }

    manager.release_camera(slot);
    info!("Done");
}
