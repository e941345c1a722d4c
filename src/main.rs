use clap::Parser;
use semicircle_chart::chart::SemiCircleChart;
use semicircle_chart::config;
use semicircle_chart::events::PointerEvent;
use semicircle_chart::feedback::LogFeedback;
use semicircle_chart::geometry::Size;
use semicircle_chart::render;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semicircle-chart", version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the per-user settings.toml)
    #[arg(short = 's', long)]
    settings: Option<PathBuf>,

    /// Write a commented settings template to the per-user location and exit
    #[arg(long)]
    init: bool,

    #[arg(long, default_value_t = 400.0)]
    width: f64,

    #[arg(long, default_value_t = 240.0)]
    height: f64,

    /// Pointer events to replay before rendering, e.g. `down:120,80 move:300,90 up`
    #[arg(short = 'e', long = "event", num_args = 1..)]
    events: Vec<PointerEvent>,

    /// Where to write the rendered PNG
    #[arg(short = 'o', long, default_value = "chart.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init {
        let path = config::write_default_settings()?;
        println!("{}", path.display());
        return Ok(());
    }

    let settings = match &cli.settings {
        Some(path) => config::load_settings(Some(path.as_path()))?,
        None => config::load_or_default(None),
    };

    let mut chart = SemiCircleChart::new(settings.configuration, Size::new(cli.width, cli.height))
        .with_feedback(LogFeedback);
    chart.on_highlighted_index_change(|index| match index {
        Some(i) => log::info!("Highlighted slice {}", i),
        None => log::info!("Highlight cleared"),
    });

    chart.set_background_color(settings.background_color)?;
    chart.set_hole_color(settings.hole_color)?;
    if let Err(e) = chart.draw(settings.items) {
        log::error!("Chart left empty: {}", e);
    }

    for event in cli.events {
        let action = chart.handle_pointer(event);
        for anim in &action.animations {
            log::debug!(
                "{} slice {}: {:.1} -> {:.1} over {:?}",
                anim.kind,
                anim.index,
                anim.from_radius,
                anim.to_radius,
                anim.duration
            );
        }
    }

    render::write_png(&chart, &cli.output)?;
    Ok(())
}
