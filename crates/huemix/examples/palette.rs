use huemix::analysis::analyze;
use huemix::contrast::{contrast_ratio, wcag_level};
use huemix::palette::{Adjustment, Palette};
use huemix::Hex;

fn print_palette(palette: &Palette) {
    println!("{}: {}", palette.name(), palette.description());
    for swatch in palette.swatches() {
        println!(
            "    {:<10} {}  {}",
            swatch.name().unwrap_or("?"),
            swatch.hex(),
            swatch.hsl()
        );
    }

    let analysis = analyze(palette.swatches());
    let tags: Vec<_> = analysis.style_tags.iter().map(|tag| tag.name()).collect();
    println!(
        "    brightness {}, saturation {}, warmth {}, tags: {}\n",
        analysis.brightness,
        analysis.saturation,
        analysis.warmth,
        tags.join(", ")
    );
}

fn main() {
    // 1. Derive a palette from a keyword and from a hex literal.
    let jungle = Palette::from_input("Jungle");
    print_palette(&jungle);
    print_palette(&Palette::from_input("#4CAE4F"));

    // 2. Warm the keyword palette up a little.
    let warmer = jungle.adjusted(&Adjustment::new().with_warmth(25.0).with_brightness(10.0));
    print_palette(&warmer);

    // 3. Check text contrast against white.
    let white = Hex::new(255, 255, 255);
    for swatch in warmer.swatches() {
        println!(
            "{} on {}: {:>5} ({})",
            swatch.hex(),
            white,
            contrast_ratio(swatch.hex(), white),
            wcag_level(swatch.hex(), white)
        );
    }
}
