#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// 64-bit World - a scrollable pixel-map portfolio
#[derive(Parser, Debug)]
#[command(name = "bitfolio-desktop")]
#[command(about = "64-bit World - scroll a retro world map through where I'm from, studied, and worked")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1024.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let title = args.title.unwrap_or_else(|| "64-bit Me".to_string());

    tracing::info!("Starting '{}' at {}x{}", title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
