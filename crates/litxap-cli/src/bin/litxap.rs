use std::path::Path;

use clap::{Parser, Subcommand};

use litxap_cli::commands::{config_ops, line_ops, word_ops};

#[derive(Parser)]
#[command(name = "litxap", about = "Na'vi syllable and stress tool")]
struct Cli {
    /// Custom affix TOML replacing the built-in tables
    #[arg(long, global = true)]
    affixes: Option<String>,
    /// Write a JSON trace to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the canonical syllables of an entry in compact notation
    Generate {
        /// Entry, e.g. "t·ì.*r·an: tì- <us> -ìri"
        notation: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Split a written word along an entry's syllables
    Match {
        /// Word as written
        word: String,
        /// Entry in compact notation
        notation: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Romanize an IPA transcription
    Romanize {
        /// IPA, e.g. "ˈut.ɾa.ja"
        ipa: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Lenite the first consonant of a word
    Lenite {
        word: String,
    },
    /// Annotate every word of a line with syllables and stress
    Line {
        /// Line of text
        text: String,
        /// Dictionary fixture (.toml or .json)
        #[arg(long)]
        dict: String,
        /// Pronunciation table for words missing from the dictionary (optional)
        #[arg(long)]
        phrases: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in affix tables as TOML
    AffixesExport,
    /// Validate a custom affix TOML file
    AffixesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Validate a pronunciation table TOML file
    PhrasesValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        litxap::trace_init::init_tracing(Path::new(dir));
    }
    if let Some(file) = &cli.affixes {
        config_ops::install_affixes(file);
    }

    match cli.command {
        Command::Generate { notation, json } => word_ops::generate(&notation, json),
        Command::Match {
            word,
            notation,
            json,
        } => word_ops::match_word(&word, &notation, json),
        Command::Romanize { ipa, json } => word_ops::romanize_cmd(&ipa, json),
        Command::Lenite { word } => word_ops::lenite(&word),
        Command::Line {
            text,
            dict,
            phrases,
            json,
        } => line_ops::line(&text, &dict, phrases.as_deref(), json),
        Command::AffixesExport => config_ops::affixes_export(),
        Command::AffixesValidate { file } => config_ops::affixes_validate(&file),
        Command::PhrasesValidate { file } => config_ops::phrases_validate(&file),
    }
}
