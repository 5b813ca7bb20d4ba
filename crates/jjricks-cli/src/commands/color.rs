use clap::Args;
use jjricks_core::{render, resolve_input, Config, RgbInput};

#[derive(Args)]
pub struct ColorArgs {
    /// Hex color, e.g. "#FA3" or "FFAA33"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    hex: String,
    /// Red channel (0-255)
    #[arg(short, long = "red", default_value = "", allow_hyphen_values = true)]
    r: String,
    /// Green channel (0-255)
    #[arg(short, long = "green", default_value = "", allow_hyphen_values = true)]
    g: String,
    /// Blue channel (0-255)
    #[arg(short, long = "blue", default_value = "", allow_hyphen_values = true)]
    b: String,
    /// Print the configured preview swatch instead of converting input
    #[arg(long, conflicts_with_all = ["hex", "r", "g", "b"])]
    preview: bool,
    /// Print {hex, rgb} as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ColorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let spec = if args.preview {
        Config::load()?.preview()?
    } else {
        let rgb = RgbInput::new(args.r, args.g, args.b);
        resolve_input(&args.hex, &rgb)?
    };
    let rendered = render(&spec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", rendered.label());
    }
    Ok(())
}
