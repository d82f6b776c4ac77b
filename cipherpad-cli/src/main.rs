//! A command-line interface for the cipherpad engine.

use cipherpad_core::{PadEngine, PadResult};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a 64-value pad\ncipherpad generate --length 64 --out ./key.pad\n\n# Encrypt a file, generating a matching pad next to it\ncipherpad encrypt ./notes.txt\n\n# Encrypt a file with an existing pad\ncipherpad encrypt ./notes.txt --pad ./key.pad\n\n# Decrypt it again\ncipherpad decrypt ./notes.txt --pad ./notes.txt.pad"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new pad file
    Generate {
        /// Number of values in the pad
        #[arg(short, long)]
        length: usize,

        /// Smallest value the pad may contain
        #[arg(long, default_value_t = 0)]
        min: i32,

        /// Largest value the pad may contain
        #[arg(long, default_value_t = 255)]
        max: i32,

        /// Where to write the pad file
        #[arg(short, long)]
        out: PathBuf,

        /// Overwrite an existing pad file at the destination
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Encrypt a file in place (XOR family)
    Encrypt {
        /// Path of the file to encrypt
        file: PathBuf,

        /// Pad file to use; if omitted, a pad sized to the file is
        /// generated and written next to it as FILE.pad
        #[arg(short, long)]
        pad: Option<PathBuf>,
    },
    /// Decrypt a file in place (XOR family)
    Decrypt {
        /// Path of the file to decrypt
        file: PathBuf,

        /// Pad file the encryption used
        #[arg(short, long)]
        pad: PathBuf,
    },
    /// Encode a file in place (additive family)
    Encode {
        /// Path of the file to encode
        file: PathBuf,

        /// Pad file to use; if omitted, a pad sized to the file is
        /// generated and written next to it as FILE.pad
        #[arg(short, long)]
        pad: Option<PathBuf>,
    },
    /// Decode a file in place (additive family)
    Decode {
        /// Path of the file to decode
        file: PathBuf,

        /// Pad file the encoding used
        #[arg(short, long)]
        pad: PathBuf,
    },
    /// Validate a pad file and print its values
    Show {
        /// Path of the pad file
        pad: PathBuf,
    },
}

/// Destination for an auto-generated pad: the input path plus a `.pad`
/// suffix (appended, not substituted, so `notes.txt` maps to
/// `notes.txt.pad`).
fn sibling_pad_path(file: &Path) -> PathBuf {
    let mut name = OsString::from(file.as_os_str());
    name.push(".pad");
    PathBuf::from(name)
}

/// Loads the pad from `pad` when given; otherwise rerolls one to match
/// `file` and writes it to the sibling pad path, refusing to clobber an
/// existing pad file.
fn prepare_pad(engine: &mut PadEngine, file: &Path, pad: Option<&Path>) -> PadResult<()> {
    match pad {
        Some(pad_path) => {
            let count = engine.import_from_file(pad_path)?;
            info!("loaded {count} pad values from '{}'", pad_path.display());
        }
        None => {
            let size = engine.reroll_for_file(file)?;
            let pad_path = sibling_pad_path(file);
            engine.export_to_file(&pad_path, false)?;
            info!("generated a {size}-value pad");
            println!("{}", pad_path.display());
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> PadResult<()> {
    match &cli.command {
        Commands::Generate {
            length,
            min,
            max,
            out,
            force,
        } => {
            let mut engine = PadEngine::new(*min, *max);
            engine.reroll(*length);
            engine.export_to_file(out, *force)?;
            info!("wrote a {length}-value pad to '{}'", out.display());
            println!("{}", out.display());
        }
        Commands::Encrypt { file, pad } => {
            let mut engine = PadEngine::default();
            prepare_pad(&mut engine, file, pad.as_deref())?;
            engine.encrypt_file(file)?;
            info!("encrypted '{}' in place", file.display());
        }
        Commands::Decrypt { file, pad } => {
            let mut engine = PadEngine::default();
            engine.import_from_file(pad)?;
            engine.decrypt_file(file)?;
            info!("decrypted '{}' in place", file.display());
        }
        Commands::Encode { file, pad } => {
            let mut engine = PadEngine::default();
            prepare_pad(&mut engine, file, pad.as_deref())?;
            engine.encode_file(file)?;
            info!("encoded '{}' in place", file.display());
        }
        Commands::Decode { file, pad } => {
            let mut engine = PadEngine::default();
            engine.import_from_file(pad)?;
            engine.decode_file(file)?;
            info!("decoded '{}' in place", file.display());
        }
        Commands::Show { pad } => {
            let mut engine = PadEngine::default();
            let count = engine.import_from_file(pad)?;
            println!("{count} values");
            println!("{}", engine.rendered());
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
