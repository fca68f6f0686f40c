//! Configuration options for seqmatch.
//!
//! [`SeqMatchOptions`] is both the command-line parser of `sqm` and, through
//! [`SeqMatchOptionsBuilder`], the way library users configure a [`SeqMatch`](crate::SeqMatch)
//! run.

use derive_builder::Builder;

use crate::Algorithm;
use crate::output::OutputFormat;
use crate::reader::Source;

/// How to print the automaton
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum GraphFormat {
    /// Graphviz DOT, pipe it to `dot -Tsvg`
    Dot,
    /// RON description of nodes and edges
    Ron,
    /// Plain text transition table
    Table,
}

/// sqm - exact pattern search over symbol sequences
///
/// sqm finds every occurrence of a pattern in a sequence (DNA or any text) and reports the
/// number of comparisons each algorithm needed.
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[builder(setter(into, strip_option))]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "sqm", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SeqMatchOptions {
    //  --- Search ---
    /// Pattern to search for
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "", help_heading = "Search"))]
    pub pattern: String,

    /// Comma-separated list of algorithms to run
    ///
    /// * **naive**: compare the pattern at every offset
    /// * **kmp**: Knuth-Morris-Pratt, one comparison per equality test
    /// * **automaton**: automaton over the sequence's alphabet, one comparison per symbol read
    #[cfg_attr(
        feature = "cli",
        arg(
            short,
            long = "algo",
            default_value = "naive,kmp,automaton",
            value_enum,
            value_delimiter = ',',
            help_heading = "Search",
            verbatim_doc_comment
        )
    )]
    pub algorithm: Vec<Algorithm>,

    //  --- Input ---
    /// Sequence to search
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Input", conflicts_with = "file"))]
    pub text: Option<String>,

    /// Read the sequence from a file
    ///
    /// Without `--text` or `--file`, the sequence is read from stdin
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Input"))]
    pub file: Option<String>,

    /// Treat the sequence and pattern as raw bytes instead of UTF-8 characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub bytes: bool,

    /// Keep line terminators and surrounding whitespace in the sequence
    ///
    /// Line terminators never belong to the extracted alphabet, so the automaton stops on the
    /// first one it meets
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub raw: bool,

    //  --- Output ---
    /// Report format
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "text", help_heading = "Output"))]
    pub format: OutputFormat,

    /// Print the automaton of the pattern instead of searching
    ///
    /// The automaton is built over the alphabet of the sequence
    #[cfg_attr(feature = "cli", arg(short, long, value_enum, help_heading = "Output"))]
    pub graph: Option<GraphFormat>,

    /// With --graph, print the KMP failure links instead of the full automaton
    ///
    /// This view does not need a sequence
    #[cfg_attr(feature = "cli", arg(long, requires = "graph", help_heading = "Output"))]
    pub failure_links: bool,

    //  --- Scripting ---
    /// Pipe log output to a file
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub log_file: Option<String>,

    /// Generate shell completion script
    ///
    /// Examples: `source <(sqm --shell bash)`
    ///          `sqm --shell zsh > ~/.zfunc/_sqm`
    #[cfg(feature = "cli")]
    #[cfg_attr(
        feature = "cli",
        arg(long, value_name = "SHELL", help_heading = "Scripting", value_enum, verbatim_doc_comment)
    )]
    pub shell: Option<crate::completions::Shell>,

    /// Generate man page and output it to stdout
    #[cfg(feature = "cli")]
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub man: bool,
}

impl Default for SeqMatchOptions {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            algorithm: Algorithm::ALL.to_vec(),
            text: None,
            file: None,
            bytes: false,
            raw: false,
            format: OutputFormat::default(),
            graph: None,
            failure_links: false,
            log_file: None,
            #[cfg(feature = "cli")]
            shell: None,
            #[cfg(feature = "cli")]
            man: false,
        }
    }
}

impl SeqMatchOptionsBuilder {
    /// Builds the SeqMatchOptions from the builder
    pub fn build(&mut self) -> Result<SeqMatchOptions, SeqMatchOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl SeqMatchOptions {
    /// Finalizes the options: drops repeated algorithms, keeping the first occurrence
    pub fn build(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.algorithm.len());
        self.algorithm.retain(|algorithm| {
            if seen.contains(algorithm) {
                false
            } else {
                seen.push(*algorithm);
                true
            }
        });
        self
    }

    /// Where the sequence should be read from
    pub fn source(&self) -> Source {
        match (&self.text, &self.file) {
            (Some(text), _) => Source::Text(text.clone()),
            (None, Some(file)) => Source::File(file.into()),
            (None, None) => Source::Stdin,
        }
    }
}
