//! Front-end pipeline
//!
//! Drives the lexer and parser over one source file and accumulates every
//! problem found as a diagnostic, so that a single run reports all syntax
//! errors the parser recovered from.

use crate::ast::Program;
use crate::error::{ErrorCollector, ShardError, ShardResult};
use crate::lexer::{tokenize, Token};
use crate::parse_source;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::fs;
use std::path::Path;

/// Source text plus the diagnostics collected for it
pub struct CompilationState {
    pub source_file: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
}

impl CompilationState {
    pub fn new<P: AsRef<Path>>(source_file: P) -> ShardResult<Self> {
        let source = fs::read_to_string(source_file.as_ref()).map_err(|e| {
            ShardError::Io(format!(
                "Failed to read source file {}: {}",
                source_file.as_ref().display(),
                e
            ))
        })?;
        Self::new_from_string(&source_file.as_ref().display().to_string(), source)
    }

    /// State over in-memory source; `filename` is only used for display
    pub fn new_from_string(filename: &str, source: String) -> ShardResult<Self> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(filename.to_string(), source.clone());

        Ok(Self {
            source_file: filename.to_string(),
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        })
    }

    pub fn add_error(&mut self, error: ShardError) {
        self.error_collector.add_error(error, self.file_id);
    }

    /// Renders every collected diagnostic to stderr
    pub fn report_diagnostics(&self) -> ShardResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)
                .map_err(|e| ShardError::Io(format!("Failed to emit diagnostic: {}", e)))?;
        }

        Ok(())
    }

    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}

pub struct CompilationPipeline {
    state: CompilationState,
}

impl CompilationPipeline {
    pub fn new(state: CompilationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CompilationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CompilationState {
        &mut self.state
    }

    /// Lexes the whole source. A lexical error is recorded and yields `None`.
    pub fn tokenize(&mut self) -> Option<Vec<Token>> {
        log::debug!("tokenizing {}", self.state.source_file);

        match tokenize(&self.state.source) {
            Ok(tokens) => {
                log::debug!("{} tokens", tokens.len());
                Some(tokens)
            }
            Err(e) => {
                self.state.add_error(ShardError::Lexer(e));
                None
            }
        }
    }

    /// Parses the source, recording every recovered syntax error. Returns
    /// `None` only when the parse was aborted by a lexical error.
    pub fn parse(&mut self) -> Option<Program> {
        log::debug!("parsing {}", self.state.source_file);

        match parse_source(&self.state.source, self.state.source_file.as_str()) {
            Ok(output) => {
                for diagnostic in output.diagnostics {
                    self.state.add_error(ShardError::Parser(diagnostic));
                }
                Some(output.program)
            }
            Err(e) => {
                self.state.add_error(ShardError::Parser(e));
                None
            }
        }
    }

    pub fn report_errors(&self) -> ShardResult<()> {
        self.state.report_diagnostics()?;

        if self.state.has_errors() {
            let count = self.state.error_count();
            eprintln!(
                "\n{} {} found",
                count,
                if count == 1 { "error" } else { "errors" }
            );
        }

        Ok(())
    }

    /// Lexes, parses and reports. The program is returned even when
    /// syntax errors were recovered from; check [`CompilationState::has_errors`].
    pub fn run(&mut self) -> ShardResult<Option<Program>> {
        let program = match self.tokenize() {
            Some(_) => self.parse(),
            None => None,
        };

        self.report_errors()?;
        Ok(program)
    }
}
