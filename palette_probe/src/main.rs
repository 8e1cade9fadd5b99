//! CLI probe for the IPT_HQ palette.
//!
//! Commands:
//! - `list` - print every palette name in the configured order
//! - `show <name>` - print one entry's packed bits, channels, and hex
//! - `closest <hex>` - nearest palette name to an sRGB color
//! - `sync` - run both registry sync routines against an in-memory registry
//!
//! Configuration is read from `config/probe.toml` when present.

use std::env;
use std::process::ExitCode;

use palette_core::config::{ListOrder, ProbeConfig};
use palette_core::packed::PackedColor;
use palette_core::registry::{append_to_known_colors, edit_known_colors, SimpleRegistry};
use palette_core::{logging, palette, PaletteError, PaletteResult};

const CONFIG_PATH: &str = "config/probe.toml";

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> PaletteResult<()> {
    let config = load_config();

    match args.first().map(String::as_str) {
        Some("list") => list(&config),
        Some("show") => show(&config, args.get(1).map(String::as_str)),
        Some("closest") => closest(&config, args.get(1).map(String::as_str)),
        Some("sync") => sync(&config),
        _ => {
            eprintln!("usage: palette_probe <list | show NAME | closest HEX | sync>");
            Ok(())
        }
    }
}

fn load_config() -> ProbeConfig {
    match ProbeConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!("using default config ({})", err);
            ProbeConfig::default()
        }
    }
}

fn list(config: &ProbeConfig) -> PaletteResult<()> {
    let names = match config.order {
        ListOrder::Alphabetical => palette::names(),
        ListOrder::Hue => palette::names_by_hue(),
        ListOrder::Lightness => palette::names_by_lightness(),
    };
    tracing::info!("listing {} colors in {:?} order", names.len(), config.order);
    for name in names {
        let packed = palette::lookup(name, palette::TRANSPARENT);
        println!("{:<22} {}", name, packed);
    }
    Ok(())
}

fn show(config: &ProbeConfig, name: Option<&str>) -> PaletteResult<()> {
    let Some(name) = name else {
        eprintln!("usage: palette_probe show NAME");
        return Ok(());
    };
    let packed = palette::named(name);
    if config.log_operations {
        logging::log_lookup(
            &config.log_dir,
            name,
            packed.is_some(),
            packed.unwrap_or(palette::TRANSPARENT).to_rgba8888(),
        )?;
    }
    let packed = packed.ok_or_else(|| PaletteError::UnknownName {
        name: name.to_string(),
    })?;
    println!("{}", name);
    println!("  hex       {}", packed);
    println!("  bits      0x{:08X}", packed.to_bits());
    println!(
        "  ipt       i={:.4} p={:+.4} t={:+.4} a={:.4}",
        packed.intensity(),
        packed.protan(),
        packed.tritan(),
        packed.alpha()
    );
    println!(
        "  hsl-ish   hue={:.3} sat={:.3} light={:.3}",
        packed.hue(),
        packed.saturation(),
        packed.lightness()
    );
    Ok(())
}

fn closest(config: &ProbeConfig, hex: Option<&str>) -> PaletteResult<()> {
    let Some(hex) = hex else {
        eprintln!("usage: palette_probe closest HEX");
        return Ok(());
    };
    let packed = PackedColor::from_hex(hex)?;
    let [r, g, b, _] = packed.to_rgba();
    let (name, diff) = palette::closest_name([r, g, b]);
    if diff > config.closest_max_delta {
        tracing::warn!("nearest match {:?} is {:.2} ΔE94 away", name, diff);
    }
    println!("{} ({:.3} ΔE94)", name, diff);
    Ok(())
}

fn sync(config: &ProbeConfig) -> PaletteResult<()> {
    let mut registry = SimpleRegistry::new();
    append_to_known_colors(&mut registry);
    tracing::info!("appended {} colors", registry.len());
    if config.log_operations {
        logging::log_sync(&config.log_dir, "append_to_known_colors", registry.len())?;
    }

    edit_known_colors(&mut registry);
    tracing::info!("refreshed {} colors", registry.len());
    if config.log_operations {
        logging::log_sync(&config.log_dir, "edit_known_colors", registry.len())?;
    }
    Ok(())
}
