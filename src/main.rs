use std::error::Error;

use clap::Parser;

use qrsketch::{ECLevel, QRBuilder, QRError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to lay out.
    text: String,

    /// Error correction level: L, M, Q or H.
    #[arg(short, long, default_value = "M")]
    ec_level: ECLevel,

    /// Output image side length in pixels.
    #[arg(short, long, default_value_t = 256)]
    size: u32,

    /// PNG file to write. Prints the symbol to the terminal when omitted.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.text.is_empty() {
        return Err(QRError::EmptyData.into());
    }

    let qr = QRBuilder::new(&args.text).ec_level(args.ec_level).build();

    println!("Report:");
    println!("{}", qr.metadata());
    if let Some(stats) = qr.stats() {
        println!(
            "Capacity: {} bits, Payload: {} bits, Truncated: {} bits",
            stats.capacity, stats.payload_len, stats.truncated_bits
        );
        if stats.count_overflow {
            println!("Warning: character count exceeds the 8 bit count field");
        }
        if stats.lossy_units > 0 {
            println!("Warning: {} characters cut to their low byte", stats.lossy_units);
        }
    }
    let total_modules = qr.width() * qr.width();
    let dark_modules = qr.count_dark_modules();
    println!(
        "Dark Cells: {}, Light Cells: {}, Balance: {}%\n",
        dark_modules,
        total_modules - dark_modules,
        dark_modules * 100 / total_modules
    );

    match args.output {
        Some(path) => {
            let img = qr.to_image(args.size)?;
            img.save(&path)?;
            println!("Saved to {path}");
        }
        None => println!("{}", qr.to_str(1)),
    }

    Ok(())
}
