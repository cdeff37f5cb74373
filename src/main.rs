// SPDX-License-Identifier: MIT
//
// mplcolors — display named plotting colors in a true-color terminal.
//
// The binary is thin glue over three crates:
//
//   mpl-color   → hex/RGB/HSV codec and harmony schemes
//   mpl-palette → named color tables, search, colormap data
//   mpl-render  → ANSI output, grids, banners, colorbars
//
// Each invocation is one pass: parse flags, pick a table, run one
// lookup/derivation, print, exit. Errors surface as a single stderr
// line and a non-zero exit code.

use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use log::debug;

use mpl_color::{Color, Scheme};
use mpl_palette::{colormap, ColorTable};
use mpl_render::swatch::swatch;
use mpl_render::{banner, colorbar, grid, stride, terminal, Size, COLUMN_WIDTH, LABEL_WIDTH};

// ─── CLI ─────────────────────────────────────────────────────────────────────

/// Display and manipulate named plotting colors in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mplcolors", version, about)]
struct Args {
    /// Print the built-in colorbars.
    #[arg(short = 'b', long)]
    colorbars: bool,

    /// Use the extended (xkcd survey) color table.
    #[arg(short = 'a', long)]
    all: bool,

    /// Substring search over color names.
    #[arg(short = 's', long, value_name = "QUERY")]
    search: Option<String>,

    /// Print the complement of a color (name or hex).
    #[arg(short = 'c', long, value_name = "COLOR")]
    complement: Option<String>,

    /// Print the triad of a color (name or hex).
    #[arg(short = 't', long, value_name = "COLOR")]
    triad: Option<String>,

    /// Print the tetrad of a color (name or hex).
    #[arg(short = 'r', long, value_name = "COLOR")]
    tetrad: Option<String>,

    /// Print the split complement of a color (name or hex).
    #[arg(long, alias = "sc", value_name = "COLOR")]
    split: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("mplcolors: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let table = if args.all {
        ColorTable::extended()
    } else {
        ColorTable::css()
    };
    let size = terminal::size_or_default();
    debug!("table={} size={}x{}", table.name(), size.cols, size.rows);

    let stdout = io::stdout().lock();
    let mut w = BufWriter::new(stdout);

    if let Some(query) = &args.search {
        search(&mut w, table, query, size)?;
    } else if let Some(input) = &args.complement {
        scheme(&mut w, table, input, Scheme::Complement, size)?;
    } else if let Some(input) = &args.triad {
        scheme(&mut w, table, input, Scheme::Triad, size)?;
    } else if let Some(input) = &args.tetrad {
        scheme(&mut w, table, input, Scheme::Tetrad, size)?;
    } else if let Some(input) = &args.split {
        scheme(&mut w, table, input, Scheme::SplitComplement, size)?;
    } else if args.colorbars {
        colorbars(&mut w, size)?;
    } else {
        listing(&mut w, table, size)?;
    }

    w.flush()?;
    Ok(())
}

// ─── Commands ────────────────────────────────────────────────────────────────

/// Print the whole table as a swatch grid, ordered by HSV so similar
/// hues sit together.
fn listing(w: &mut impl Write, table: ColorTable, size: Size) -> Result<()> {
    debug!("listing {} colors", table.len());
    let entries = colored_entries(&table.sorted_by_hsv())?;
    grid(w, &entries, size.cols)?;
    Ok(())
}

/// Substring search with fuzzy fallback suggestions.
fn search(w: &mut impl Write, table: ColorTable, query: &str, size: Size) -> Result<()> {
    banner(w, &format!("RESULT (target = {query})"), size.cols)?;

    let hits = table.search(query);
    debug!("{} hits for {query:?}", hits.len());
    if hits.is_empty() {
        banner(w, "!! No color name hit. Try another color name. !!", size.cols)?;
        let near = table.nearest(query);
        if !near.is_empty() {
            writeln!(w, "Maybe...")?;
            grid(w, &colored_entries(&near)?, size.cols)?;
        }
        return Ok(());
    }

    grid(w, &colored_entries(&hits)?, size.cols)?;
    Ok(())
}

/// Derive and print a harmony scheme: the base color first, then each
/// derived color labeled with its hex value.
fn scheme(
    w: &mut impl Write,
    table: ColorTable,
    input: &str,
    scheme: Scheme,
    size: Size,
) -> Result<()> {
    let base = table.resolve(input)?;
    debug!("{} of {input} = {base}", scheme.label());

    banner(w, &format!("{} of {input}", scheme.label()), size.cols)?;

    let colors = scheme.apply(base);
    swatch(w, input, colors[0], COLUMN_WIDTH)?;
    writeln!(w)?;
    for color in &colors[1..] {
        swatch(w, &color.to_hex(), *color, COLUMN_WIDTH)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Print every built-in colorbar, grouped under centered category titles.
fn colorbars(w: &mut impl Write, size: Size) -> Result<()> {
    let step = stride(size.cols);
    // Width of one rendered bar row, used to center the group titles.
    #[allow(clippy::cast_possible_truncation)]
    let bar_width = ((256 + LABEL_WIDTH) / step) as u16;

    for group in colormap::groups() {
        banner(w, group.title, bar_width)?;
        for map in group.maps {
            let samples = sample_bar(map, step);
            colorbar(w, map.name(), &samples)?;
        }
    }
    Ok(())
}

/// Sample a colormap every `step` of 256 gradient positions.
#[allow(clippy::cast_precision_loss)]
fn sample_bar(map: &colormap::Colormap, step: usize) -> Vec<Color> {
    (0..256usize)
        .step_by(step)
        .map(|i| map.sample(i as f32 / 255.0))
        .collect()
}

/// Pair table entries with their parsed colors for the grid renderer.
fn colored_entries<'a>(
    entries: &[(&'a str, &str)],
) -> Result<Vec<(&'a str, Color)>> {
    entries
        .iter()
        .map(|&(name, hex)| Ok((name, Color::hex(hex)?)))
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
