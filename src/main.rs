use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use glyphtools::{
    combinations, load_snapshot, run_edit, GlyphInfo, GlyphToolsError, MatchItalicAngle,
    Orientation, Parallelize, SegmentPolicy, SelectionEdit, SnapshotHost,
};

/// Outline editing helpers for font editors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make one selected segment parallel to another
    Parallelize {
        /// Selection snapshot (JSON)
        snapshot: PathBuf,

        /// Look for a vertical pair first (shift in the editor)
        #[arg(long)]
        vertical: bool,

        /// Use the right/upper segment as the source (command in the editor)
        #[arg(long)]
        flip: bool,

        /// Pair up selected nodes directly instead of walking each path
        #[arg(long)]
        pairwise: bool,

        /// Where to write the edited snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Slant handles or a straight segment to the italic angle
    Italic {
        /// Selection snapshot (JSON)
        snapshot: PathBuf,

        /// Italic angle in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        angle: f64,

        /// Where to write the edited snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a spacing string from a set of letters
    Combinations {
        /// Letters to combine
        letters: Option<String>,

        /// Comma-separated hexadecimal Unicode values to add to the letters
        #[arg(short, long, value_delimiter = ',')]
        unicodes: Vec<String>,

        /// Pair each uppercase letter with each lowercase letter only
        #[arg(long)]
        upper_lower: bool,
    },
}

fn run_on_snapshot(
    path: &Path,
    edit: &dyn SelectionEdit,
    output: Option<&Path>,
) -> Result<(), GlyphToolsError> {
    log::info!("Loading {}", path.display());
    let mut host = SnapshotHost::new(load_snapshot(path)?);
    match run_edit(&mut host, edit) {
        Ok(_) => {}
        Err(e) if e.is_no_op() => return Ok(()),
        Err(e) => return Err(e),
    }
    let json = serde_json::to_string_pretty(host.document())?;
    match output {
        Some(output) => {
            log::info!("Saving {}", output.display());
            std::fs::write(output, json)?;
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn combine(
    letters: Option<String>,
    unicodes: Vec<String>,
    upper_lower: bool,
) -> Result<(), GlyphToolsError> {
    let glyphs: Vec<GlyphInfo> = unicodes
        .iter()
        .map(|u| GlyphInfo::new(format!("uni{}", u.to_uppercase()), Some(u.as_str())))
        .collect();
    let mut chars: Vec<char> = letters.unwrap_or_default().chars().collect();
    chars.extend(combinations::letters_from_glyphs(&glyphs)?);
    let text = if upper_lower {
        combinations::upper_lower_combinations(&chars)?
    } else {
        combinations::all_letter_combinations(&chars)?
    };
    println!("{}", text);
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.into())
        .init();

    let result = match args.command {
        Command::Parallelize {
            snapshot,
            vertical,
            flip,
            pairwise,
            output,
        } => {
            let prefer = if vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let policy = if pairwise {
                SegmentPolicy::Pairwise
            } else {
                SegmentPolicy::PathWalk
            };
            let edit = Parallelize::new(prefer, flip).with_policy(policy);
            run_on_snapshot(&snapshot, &edit, output.as_deref())
        }
        Command::Italic {
            snapshot,
            angle,
            output,
        } => run_on_snapshot(&snapshot, &MatchItalicAngle::new(angle), output.as_deref()),
        Command::Combinations {
            letters,
            unicodes,
            upper_lower,
        } => combine(letters, unicodes, upper_lower),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
