use std::error::Error;

use image::imageops::FilterType;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let usage = "Usage: rescale <input.png> <output.png> <width> <height>";

    let input = args.next().ok_or(usage)?;
    let output = args.next().ok_or(usage)?;
    let width: u32 = args.next().ok_or(usage)?.parse()?;
    let height: u32 = args.next().ok_or(usage)?.parse()?;

    println!("Rescaling {} to {}x{}", input, width, height);

    let img = image::open(&input)?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    resized.save(&output)?;

    println!("Saved: {}", output);
    Ok(())
}
