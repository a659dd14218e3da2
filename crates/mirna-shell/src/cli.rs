//! CLI argument definitions for the query console.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use mirna_loader::{discover_map_files, MapFiles};

#[derive(Parser, Debug)]
#[command(
    name = "mirna-query",
    version,
    about = "Look up miRNA / gene interactions",
    long_about = "Loads mirMap.txt and geneMap.txt, then reads one miRNA or \
                  Uniprot gene name per line and prints its interaction partners."
)]
pub struct Cli {
    /// Directory holding mirMap.txt and geneMap.txt.
    #[arg(long, short = 'd', value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// miRNA-keyed table (overrides <DIR>/mirMap.txt).
    #[arg(long, value_name = "FILE")]
    pub mir_map: Option<PathBuf>,

    /// Gene-keyed table (overrides <DIR>/geneMap.txt).
    #[arg(long, value_name = "FILE")]
    pub gene_map: Option<PathBuf>,

    /// Print both loaded tables instead of starting the console.
    #[arg(long)]
    pub dump: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable ANSI colors in log output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolves the two table paths, `--mir-map` / `--gene-map` taking
    /// precedence over the conventional names in the data directory.
    pub fn map_files(&self) -> MapFiles {
        let mut files = discover_map_files(&self.data_dir);
        if let Some(mirna) = &self.mir_map {
            files.mirna = mirna.clone();
        }
        if let Some(gene) = &self.gene_map {
            files.gene = gene.clone();
        }
        files
    }
}
