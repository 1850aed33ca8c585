//! Generate command: print the shade scale of a base color.

use crate::cli::common::{parse_color, render_palette, resolve_group, CliResult, PaletteFormat};
use crate::models::Palette;
use clap::Args;

/// Generate the 11-shade palette for a base color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Base color as hex (`#2563eb`, `2563eb`, `#26e`)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output format: text, json, or config
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Group name used by the config format (defaults to the configured one)
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let format = PaletteFormat::parse(&self.format)?;
        let base = parse_color(&self.color)?;
        let group = resolve_group(self.group.as_deref())?;

        let palette = Palette::generate(base);
        tracing::debug!(base = %base, ?format, "generated palette");

        println!("{}", render_palette(&palette, format, &group)?);
        Ok(())
    }
}
