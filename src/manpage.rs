//! Provides what's needed to generate sqm's man page
use std::io::Write;

use clap::CommandFactory;
use clap_mangen::Man;
use color_eyre::eyre::Result;
use roff::{Inline, Roff};

use crate::SeqMatchOptions;

const ALGORITHMS_SECTION: &str = "
Every algorithm reports the same occurrences, overlapping ones included. Only the number of
comparisons differs, each counted by its own rule.
";

const NAIVE_SS: &str = "
Aligns the pattern at every offset where it fits and compares it symbol by symbol, stopping at
the first mismatch. Every compared symbol counts, the mismatching one included.
Worst case: n * m comparisons.
";

const KMP_SS: &str = "
Knuth-Morris-Pratt. On a mismatch the pattern falls back through its failure table instead of
moving the sequence backward. Every equality test counts once, successful or not.
At most 2 * n comparisons.
";

const AUTOMATON_SS: &str = "
Builds a deterministic automaton with one state per matched pattern length, over the alphabet of
the sequence, then takes one transition per symbol read. The comparison count is the number of
transitions taken: exactly n when the whole sequence is scanned.
A symbol outside the alphabet (a line terminator with --raw) stops the scan; the occurrences found
so far are still reported.
";

const EXIT_CODES_SECTION: &str = "
* 0: at least one occurrence found (or --graph, --shell, --man output)
* 1: no occurrence
* 2: error
";

fn parse_str(content: &str) -> Vec<Inline> {
    let mut res = Vec::new();
    for line in content.trim().lines() {
        res.push(Inline::Roman(line.to_string()));
        res.push(Inline::LineBreak);
    }
    res
}

fn section(c: &mut Roff, name: &str, content: &str) {
    c.control("SH", [name]);
    c.text(parse_str(content));
}

fn subsection(c: &mut Roff, name: &str, content: &str) {
    c.control("SS", [name]);
    c.text(parse_str(content));
}

/// Generate sqm's manpage and write it to the writer
pub fn generate<W>(w: &mut W) -> Result<()>
where
    W: Write,
{
    let base = Man::new(SeqMatchOptions::command());
    let mut custom = Roff::default();

    // Render normal sections, as would mangen do
    base.render_title(w)?;
    base.render_name_section(w)?;
    base.render_synopsis_section(w)?;
    base.render_description_section(w)?;
    base.render_options_section(w)?;

    section(&mut custom, "ALGORITHMS", ALGORITHMS_SECTION);
    subsection(&mut custom, "naive", NAIVE_SS);
    subsection(&mut custom, "kmp", KMP_SS);
    subsection(&mut custom, "automaton", AUTOMATON_SS);

    section(
        &mut custom,
        "INPUT",
        "
The sequence comes from --text, --file or stdin, in that order of precedence.
Line terminators are removed and surrounding whitespace trimmed, from the sequence and the
pattern alike, unless --raw is given.
",
    );

    section(&mut custom, "ENVIRONMENT VARIABLES", "");
    subsection(
        &mut custom,
        "SEQMATCH_DEFAULT_OPTIONS",
        "Will be parsed and used as default options. Example: `--algo kmp --bytes`",
    );
    subsection(
        &mut custom,
        "RUST_LOG",
        "Log filter, e.g. `debug` or `seqmatch=trace`. See also --log-file",
    );

    section(&mut custom, "EXIT CODES", EXIT_CODES_SECTION);

    custom.to_writer(w)?;

    // Finish with mangen version section
    base.render_version_section(w)?;
    Ok(())
}
