use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};

use zipline_calc::alert::{AlertSink, TerminalBell};
use zipline_calc::schematic::{self, DrawingOptions};
use zipline_calc::{io as design_io, resolve_with_policy, ride, DesignInput, LevelingPolicy};

#[derive(Parser)]
#[command(name = "zipline_calc_cli", about = "Zipline layout calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default design file to edit
    Init {
        /// Destination JSON path
        path: PathBuf,
    },
    /// Print a full geometry and ride report for a design
    Report {
        /// Design JSON path; omit to use the built-in default design
        config: Option<PathBuf>,
        /// Leveling policy: off, correction-only or everywhere
        #[arg(long, default_value = "correction-only", value_parser = parse_policy)]
        policy: LevelingPolicy,
    },
    /// Render a design as a side-view SVG drawing
    Svg {
        /// Design JSON path; omit to use the built-in default design
        config: Option<PathBuf>,
        /// Output SVG path
        #[arg(long, default_value = "zipline.svg")]
        out: PathBuf,
        /// Horizontal and vertical scale
        #[arg(long, default_value_t = 10.0)]
        pixels_per_foot: f64,
        /// Blank border around the drawing
        #[arg(long, default_value_t = 50.0)]
        margin: f64,
        /// Total drawing height
        #[arg(long, default_value_t = 300.0)]
        height: f64,
    },
    /// Evaluate a design and exit non-zero if it is unsafe
    Check {
        /// Design JSON path; omit to use the built-in default design
        config: Option<PathBuf>,
    },
}

fn parse_policy(s: &str) -> Result<LevelingPolicy, String> {
    match s {
        "off" => Ok(LevelingPolicy::Off),
        "correction-only" => Ok(LevelingPolicy::CorrectionOnly),
        "everywhere" => Ok(LevelingPolicy::Everywhere),
        other => Err(format!(
            "unknown policy '{other}', expected off, correction-only or everywhere"
        )),
    }
}

fn load_design(config: &Option<PathBuf>) -> io::Result<DesignInput> {
    match config {
        Some(path) => design_io::read_design_json(path),
        None => Ok(DesignInput::default()),
    }
}

fn run(cli: Cli) -> io::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            design_io::write_design_json(&path, &DesignInput::default())?;
            println!("Wrote default design to {}", path.display());
        }
        Commands::Report { config, policy } => {
            let input = load_design(&config)?;
            let geo = resolve_with_policy(&input, policy);
            println!("Run: {:.1} ft", geo.run_ft);
            println!("Start anchor elevation: {:.1} ft", geo.start_anchor_elev_ft);
            println!("End anchor elevation: {:.1} ft", geo.end_anchor_elev_ft);
            println!(
                "Start anchor above start ground: {:.1} ft",
                geo.start_anchor_above_start_ground_ft
            );
            println!(
                "End anchor above end ground: {:.1} ft",
                geo.end_anchor_above_end_ground_ft
            );
            println!(
                "Sag point: {:.1}% from end ({:.1} ft from start)",
                geo.sag_point_percent_from_end, geo.sag_x_ft
            );
            println!("Sag below line: {:.1} ft", geo.sag_ft);
            println!("Cable elevation at sag: {:.1} ft", geo.cable_elev_at_sag_ft);
            println!("Seat elevation: {:.1} ft", geo.seat_elev_ft);
            println!("Clearance bottom: {:.1} ft", geo.clearance_elev_ft);
            println!("Max drop: {:.1} ft", geo.max_drop_ft);
            let max_v = ride::max_velocity_ft_per_s(geo.max_drop_ft);
            let avg_v = ride::avg_velocity_ft_per_s(geo.max_drop_ft);
            println!(
                "Max speed: {:.1} ft/s ({:.1} mph)",
                max_v,
                ride::to_mph(max_v)
            );
            println!(
                "Avg speed: {:.1} ft/s ({:.1} mph)",
                avg_v,
                ride::to_mph(avg_v)
            );
            println!("Ride time: {:.1} s", ride::ride_time_s(geo.run_ft, avg_v));
            if geo.is_safe {
                println!("Verdict: SAFE");
            } else {
                println!("Verdict: UNSAFE - rider contacts ground at the sag point");
            }
            TerminalBell.notify(!geo.is_safe);
        }
        Commands::Svg {
            config,
            out,
            pixels_per_foot,
            margin,
            height,
        } => {
            let input = load_design(&config)?;
            let geo = resolve_with_policy(&input, LevelingPolicy::default());
            let opts = DrawingOptions {
                pixels_per_foot,
                margin_px: margin,
                svg_height_px: height,
            };
            schematic::write_svg(&out, &geo, &opts)?;
            println!("Wrote drawing to {}", out.display());
        }
        Commands::Check { config } => {
            let input = load_design(&config)?;
            let geo = resolve_with_policy(&input, LevelingPolicy::default());
            if geo.is_safe {
                println!("SAFE");
            } else {
                println!("UNSAFE");
                exit(1);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        exit(1);
    }
}
