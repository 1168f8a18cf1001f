//! Command implementations for the yield dashboard CLI.
//!
//! `render` draws all dashboard panels for one selection and writes them
//! as SVG files; `list` prints the selector domains a dropdown would be
//! populated with.

use clap::Subcommand;

pub mod list;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render the dashboard for a selection, one SVG per panel
    Render {
        /// Path to the yield dataset CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Path to the world boundaries GeoJSON
        #[arg(short = 'g', long)]
        geojson: String,

        /// Output directory for the panel SVGs
        #[arg(short = 'o', long)]
        out: String,

        /// Year selection ("All Time" or a year)
        #[arg(long, default_value = ayd_model::ALL_TIME)]
        year: String,

        /// Country selection ("Worldwide" or a country name)
        #[arg(long, default_value = ayd_model::WORLDWIDE)]
        country: String,
    },

    /// Print the year and country selector domains
    List {
        /// Path to the yield dataset CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Path to the world boundaries GeoJSON
        #[arg(short = 'g', long)]
        geojson: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            csv,
            geojson,
            out,
            year,
            country,
        } => render::run_render(&csv, &geojson, &out, &year, &country),
        Command::List { csv, geojson } => list::run_list(&csv, &geojson),
    }
}
