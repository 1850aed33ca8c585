//! Random command: print the palette of a random base color.

use crate::cli::common::{render_palette, resolve_group, CliResult, PaletteFormat};
use crate::models::{Palette, RgbColor};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a palette from a random base color
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// Output format: text, json, or config
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Seed for a reproducible color
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Group name used by the config format (defaults to the configured one)
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> CliResult<()> {
        let format = PaletteFormat::parse(&self.format)?;
        let group = resolve_group(self.group.as_deref())?;

        let mut rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let base = RgbColor::random(&mut rng);
        let palette = Palette::generate(base);
        tracing::debug!(base = %base, seed = ?self.seed, "random palette");

        // JSON already carries the base; text and config get a leading line
        match format {
            PaletteFormat::Text => println!("base {}", base.to_hex()),
            PaletteFormat::Config => println!("// base {}", base.to_hex()),
            PaletteFormat::Json => {}
        }
        println!("{}", render_palette(&palette, format, &group)?);
        Ok(())
    }
}
