use docopt::Docopt;
use ellers::{
    generators::EllersMaze,
    units::{Height, Width},
};
use error_chain::bail;
use rand::{SeedableRng, XorShiftRng};
use serde_derive::Deserialize;
use std::{fs::File, io, io::prelude::*};

const USAGE: &str = "Ellers

Usage:
    ellers_driver -h | --help
    ellers_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--bias=<b>] [--seed=<s>] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n. Sides above 30 are clamped to 30.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --bias=<b>             Corridor bias factor, 1 to 99: above 50 spreads corridors more horizontally [default: 50].
    --seed=<s>             Seed the random stream for a reproducible maze.
    --text-out=<path>      Output file path for the textual rendering instead of stdout.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_bias: u8,
    flag_seed: Option<u64>,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    if args.flag_bias < 1 || args.flag_bias > 99 {
        bail!("--bias must be between 1 and 99, got {}", args.flag_bias);
    }

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut maze = EllersMaze::new(Width(width), Height(height));
    maze.bias_factor = args.flag_bias;

    let mut rng: XorShiftRng = if let Some(seed) = args.flag_seed {
        SeedableRng::from_seed(seed_words(seed))
    } else {
        rand::weak_rng()
    };
    maze.build(&mut rng);

    if args.flag_text_out.is_empty() {
        print!("{}", maze);
    } else {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

// The xorshift state must not be all zeroes; the final word is forced odd.
fn seed_words(seed: u64) -> [u32; 4] {
    let hi = (seed >> 32) as u32;
    let lo = seed as u32;
    [hi ^ 0x9e37_79b9, lo ^ 0x85eb_ca6b, hi.wrapping_add(0xc2b2_ae35), lo | 1]
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
