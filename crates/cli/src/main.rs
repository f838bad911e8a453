use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    render, timed, GridConfig, GridLayout, Hexagon, HexagonOrientation,
    HexagonalGrid, HexagonalGridBuilder,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::Display;

/// CLI for building hexagonal grids and exploring them. Builds a grid, prints
/// every cell along with its neighbors, and optionally renders it.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid to build. Supported
    /// formats: JSON, TOML. Any field left out of the file takes its default
    /// value. If no file is given, a 3x7 pointy-top rectangular grid is built
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the width of the grid, in cells
    #[structopt(long)]
    width: Option<u32>,

    /// Override the height of the grid, in cells
    #[structopt(long)]
    height: Option<u32>,

    /// Override the radius of each hexagon, in pixels
    #[structopt(long)]
    radius: Option<f64>,

    /// Override the hexagon orientation. Options: pointy_top, flat_top
    #[structopt(long)]
    orientation: Option<HexagonOrientation>,

    /// Override the grid layout. Options: rectangular, hexagonal,
    /// triangular, trapezoid
    #[structopt(long)]
    layout: Option<GridLayout>,

    /// If given, the grid will be rendered as an SVG to this file
    #[structopt(long)]
    svg: Option<PathBuf>,

    /// Print the full config used to build the grid, in TOML format, before
    /// anything else. The output can be passed back in with `--config`
    #[structopt(long)]
    print_config: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Data attached to each cell of the demo grid
#[derive(Clone, Debug)]
struct CellData {
    occupied: bool,
    color: CellColor,
}

#[derive(Copy, Clone, Debug, Display)]
#[strum(serialize_all = "snake_case")]
enum CellColor {
    Red,
    Green,
    Blue,
}

impl CellColor {
    const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    fn to_html(self) -> &'static str {
        match self {
            Self::Red => "#e06c75",
            Self::Green => "#98c379",
            Self::Blue => "#61afef",
        }
    }
}

/// The grid that gets built when no config file is given
fn demo_config() -> GridConfig {
    GridConfig {
        width: 3,
        height: 7,
        radius: 10.0,
        orientation: HexagonOrientation::PointyTop,
        layout: GridLayout::Rectangular,
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Load the config file (if any), then apply any overrides from the command
/// line
fn resolve_config(opt: &Opt) -> anyhow::Result<GridConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => demo_config(),
    };
    if let Some(width) = opt.width {
        config.width = width;
    }
    if let Some(height) = opt.height {
        config.height = height;
    }
    if let Some(radius) = opt.radius {
        config.radius = radius;
    }
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    if let Some(layout) = opt.layout {
        config.layout = layout;
    }
    Ok(config)
}

fn hex_print(hexagon: &Hexagon<'_, CellData>) {
    let data = match hexagon.data() {
        Ok(data) => format!("{} (occupied: {})", data.color, data.occupied),
        Err(_) => "none".to_owned(),
    };
    println!(
        "(X, Y, Z) : ({}, {}, {}) / ID: {} / Data: {}",
        hexagon.grid_x(),
        hexagon.grid_y(),
        hexagon.grid_z(),
        hexagon.id(),
        data
    );
}

/// Render the grid as an SVG and write it to a file
fn write_svg(
    grid: &HexagonalGrid<CellData>,
    output_path: &Path,
) -> anyhow::Result<()> {
    timed!(
        format!("Writing SVG to {:?}", output_path),
        log::Level::Info,
        {
            let document = render::grid_to_svg_with(grid, |data| {
                data.color.to_html().to_owned()
            });
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(document.to_string().as_bytes())
                .with_context(|| {
                    format!("error writing to file {:?}", output_path)
                })?;
        }
    );
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = resolve_config(&opt)?;
    info!("Building grid with config {:?}", config);
    if opt.print_config {
        let toml = toml::to_string_pretty(&config)
            .context("error serializing config")?;
        println!("{}", toml);
    }
    let mut grid: HexagonalGrid<CellData> =
        HexagonalGridBuilder::from_config(config)
            .build()
            .context("error building grid")?;

    for (i, mut hexagon) in grid.hexagons_mut().enumerate() {
        hexagon.set_data(CellData {
            occupied: false,
            color: CellColor::ALL[i % CellColor::ALL.len()],
        });
    }

    for hexagon in grid.hexagons() {
        hex_print(&hexagon);
    }

    println!("Get Neighbor\n");
    for hexagon in grid.hexagons() {
        println!("Main");
        hex_print(&hexagon);
        // Neighbors off the edge of the grid are skipped
        for index in 0..6 {
            if let Ok(neighbor) = grid.get_neighbor_by_index(&hexagon, index) {
                hex_print(&neighbor);
            }
        }
    }

    if let Some(svg_path) = &opt.svg {
        write_svg(&grid, svg_path)?;
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
