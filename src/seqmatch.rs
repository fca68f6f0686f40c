//! Runs a whole search session from options: read, normalize, search or describe.

use color_eyre::eyre::{Result, WrapErr};

use crate::options::GraphFormat;
use crate::reader::{normalize_bytes, normalize_text, read_source};
use crate::{
    Algorithm, AutomatonGraph, SearchError, SearchReport, SearchResult, SeqMatchOptions, Symbol, build_automaton,
    describe_automaton, describe_failure_links, extract_alphabet, search_automaton, search_kmp, search_naive,
};

impl Algorithm {
    /// Runs this algorithm once over `sequence`
    pub fn search<T: Symbol>(&self, sequence: &[T], pattern: &[T]) -> Result<SearchResult, SearchError> {
        match self {
            Algorithm::Naive => search_naive(sequence, pattern),
            Algorithm::Kmp => search_kmp(sequence, pattern),
            Algorithm::Automaton => search_automaton(sequence, pattern),
        }
    }
}

/// What a session produced
#[derive(Debug, Default)]
pub struct SeqMatchOutput {
    /// One report per requested algorithm, in request order
    pub reports: Vec<SearchReport>,
    /// The automaton description, when a graph was requested
    pub graph: Option<AutomatonGraph>,
}

impl SeqMatchOutput {
    /// Whether any algorithm found an occurrence
    pub fn found(&self) -> bool {
        self.reports.iter().any(|report| report.result.count() > 0)
    }
}

/// Entry point for front ends
pub struct SeqMatch;

impl SeqMatch {
    /// Reads the sequence designated by `options` and runs the session on it
    pub fn run_with(options: &SeqMatchOptions) -> Result<SeqMatchOutput> {
        if options.graph.is_some() && options.failure_links {
            // the failure links only depend on the pattern
            return Self::run_on(options, &[]);
        }
        let source = options.source();
        let raw = read_source(&source).wrap_err_with(|| format!("failed to read the sequence from {source:?}"))?;
        Self::run_on(options, &raw)
    }

    /// Runs the session on an already read sequence
    pub fn run_on(options: &SeqMatchOptions, raw: &[u8]) -> Result<SeqMatchOutput> {
        // the pattern is typed text too, it goes through the same normalization
        if options.bytes {
            let (sequence, pattern) = if options.raw {
                (raw.to_vec(), options.pattern.as_bytes().to_vec())
            } else {
                (normalize_bytes(raw), normalize_bytes(options.pattern.as_bytes()))
            };
            Self::run_symbols(options, &sequence, &pattern)
        } else {
            let text = std::str::from_utf8(raw).wrap_err("the sequence is not valid UTF-8, try --bytes")?;
            let (sequence, pattern): (Vec<char>, Vec<char>) = if options.raw {
                (text.chars().collect(), options.pattern.chars().collect())
            } else {
                (
                    normalize_text(text).chars().collect(),
                    normalize_text(&options.pattern).chars().collect(),
                )
            };
            Self::run_symbols(options, &sequence, &pattern)
        }
    }

    fn run_symbols<T: Symbol>(options: &SeqMatchOptions, sequence: &[T], pattern: &[T]) -> Result<SeqMatchOutput> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern.into());
        }
        if let Some(format) = options.graph {
            let graph = if options.failure_links {
                describe_failure_links(pattern)?
            } else {
                let alphabet = extract_alphabet(sequence.iter().copied());
                let automaton = build_automaton(pattern, &alphabet)?;
                describe_automaton(&automaton)
            };
            debug!("describing {} states as {format:?}", graph.nodes.len());
            return Ok(SeqMatchOutput {
                reports: vec![],
                graph: Some(graph),
            });
        }

        info!(
            "searching {} symbols for a pattern of {} with {:?}",
            sequence.len(),
            pattern.len(),
            options.algorithm
        );
        let reports = options
            .algorithm
            .iter()
            .map(|algorithm| Ok(SearchReport::new(*algorithm, algorithm.search(sequence, pattern)?)))
            .collect::<Result<Vec<_>, SearchError>>()?;

        Ok(SeqMatchOutput { reports, graph: None })
    }
}

/// Renders `graph` in `format`
pub fn render_graph(graph: &AutomatonGraph, format: GraphFormat) -> Result<String> {
    Ok(match format {
        GraphFormat::Dot => graph.to_dot(),
        GraphFormat::Ron => graph.to_ron().wrap_err("failed to serialize the automaton")? + "\n",
        GraphFormat::Table => graph.to_table(),
    })
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::options::SeqMatchOptionsBuilder;

    #[test]
    fn test_run_on_normalizes() {
        let opts = SeqMatchOptionsBuilder::default().pattern("TTA").build().unwrap();
        let output = SeqMatch::run_on(&opts, b"GATTA\nCATTA\n").unwrap();
        assert_eq!(output.reports.len(), 3);
        for report in &output.reports {
            assert_eq!(report.result.occurrences, vec![2, 7], "{}", report.algorithm);
        }
        assert_eq!(output.reports[2].result.comparisons, 10);
        assert!(output.found());
    }

    #[test]
    fn test_raw_truncates_automaton() {
        let opts = SeqMatchOptionsBuilder::default()
            .pattern("TA")
            .algorithm(vec![Algorithm::Kmp, Algorithm::Automaton])
            .raw(true)
            .build()
            .unwrap();
        let output = SeqMatch::run_on(&opts, b"GATA\nTATA").unwrap();
        assert_eq!(output.reports[0].result.occurrences, vec![2, 5, 7]);
        let automaton = &output.reports[1].result;
        assert_eq!(automaton.occurrences, vec![2]);
        assert_eq!(automaton.comparisons, 4);
        assert_eq!(automaton.truncated.as_ref().map(|t| t.offset), Some(4));
    }

    #[test]
    fn test_pattern_is_normalized() {
        let opts = SeqMatchOptionsBuilder::default().pattern(" TTA ").build().unwrap();
        let output = SeqMatch::run_on(&opts, b"GATTACATTA").unwrap();
        assert!(output.found());
        for report in &output.reports {
            assert_eq!(report.result.occurrences, vec![2, 7], "{}", report.algorithm);
        }

        let opts = SeqMatchOptionsBuilder::default().pattern("TTA\n").build().unwrap();
        let output = SeqMatch::run_on(&opts, b"GATTA\nCATTA\n").unwrap();
        for report in &output.reports {
            assert_eq!(report.result.occurrences, vec![2, 7], "{}", report.algorithm);
        }

        let opts = SeqMatchOptionsBuilder::default()
            .pattern("\tTA\r\n")
            .bytes(true)
            .build()
            .unwrap();
        let output = SeqMatch::run_on(&opts, b"GATA").unwrap();
        assert_eq!(output.reports[0].result.occurrences, vec![2]);
    }

    #[test]
    fn test_raw_keeps_pattern() {
        let opts = SeqMatchOptionsBuilder::default()
            .pattern("TA ")
            .algorithm(vec![Algorithm::Naive])
            .raw(true)
            .build()
            .unwrap();
        let output = SeqMatch::run_on(&opts, b"TA TA").unwrap();
        assert_eq!(output.reports[0].result.occurrences, vec![0]);
    }

    #[test]
    fn test_blank_pattern_is_empty() {
        let opts = SeqMatchOptionsBuilder::default().pattern(" \n").build().unwrap();
        let err = SeqMatch::run_on(&opts, b"acgt").unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::EmptyPattern));
    }

    #[test]
    fn test_empty_pattern_without_algorithms() {
        let opts = SeqMatchOptionsBuilder::default().algorithm(vec![]).build().unwrap();
        let err = SeqMatch::run_on(&opts, b"acgt").unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::EmptyPattern));
    }

    #[test]
    fn test_bytes_mode() {
        let opts = SeqMatchOptionsBuilder::default().pattern("é").bytes(true).build().unwrap();
        // 'é' is two bytes, searched byte by byte
        let output = SeqMatch::run_on(&opts, "café".as_bytes()).unwrap();
        assert_eq!(output.reports[0].result.occurrences, vec![3]);
    }

    #[test]
    fn test_invalid_utf8() {
        let opts = SeqMatchOptionsBuilder::default().pattern("a").build().unwrap();
        assert!(SeqMatch::run_on(&opts, &[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_empty_pattern_is_an_error() {
        let opts = SeqMatchOptionsBuilder::default().build().unwrap();
        let err = SeqMatch::run_on(&opts, b"acgt").unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::EmptyPattern));
    }

    #[test]
    fn test_graph() {
        let opts = SeqMatchOptionsBuilder::default()
            .pattern("ab")
            .graph(GraphFormat::Table)
            .build()
            .unwrap();
        let output = SeqMatch::run_on(&opts, b"abba").unwrap();
        assert!(output.reports.is_empty());
        let graph = output.graph.unwrap();
        assert_eq!(graph.edges.len(), 6);
        assert!(render_graph(&graph, GraphFormat::Table).unwrap().starts_with("      a   b\n"));
    }

    #[test]
    fn test_failure_links_need_no_sequence() {
        let opts = SeqMatchOptionsBuilder::default()
            .pattern("aab")
            .graph(GraphFormat::Dot)
            .failure_links(true)
            .build()
            .unwrap();
        let output = SeqMatch::run_with(&opts).unwrap();
        assert_eq!(output.graph.unwrap().nodes.len(), 4);
    }

    #[test]
    fn test_graph_on_empty_sequence() {
        let opts = SeqMatchOptionsBuilder::default()
            .pattern("ab")
            .graph(GraphFormat::Dot)
            .build()
            .unwrap();
        let err = SeqMatch::run_on(&opts, b"\n").unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::EmptyAlphabet));
    }
}
