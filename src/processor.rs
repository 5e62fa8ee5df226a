//! End-to-end processing API for the strut format
//!
//! [compile] runs the full pipeline: tokenize, parse, generate. The whole
//! pipeline is synchronous and single-threaded with no suspension points;
//! callers see either a complete HTML string or an error, never partial
//! output.
//!
//! The stage/format API mirrors the pipeline's intermediate artifacts for
//! tooling and tests: a [ProcessingSpec] names a stage (tokens, ast, html)
//! and a format (simple, json), and [process] renders the requested view of
//! a source document.

use std::fmt;

use crate::ast::tag::serialize_tag;
use crate::codegen::{generate, GenError};
use crate::lexer::{tokenize, LexError};
use crate::parser::{parse, ParseError};

/// Errors from any stage of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Gen(GenError),
    /// The processing spec string named an unknown stage or format
    InvalidSpec(String),
    /// A JSON view of a pipeline artifact could not be rendered
    Serialization(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "Lexer error: {}", e),
            CompileError::Parse(e) => write!(f, "Parser error: {}", e),
            CompileError::Gen(e) => write!(f, "Codegen error: {}", e),
            CompileError::InvalidSpec(msg) => write!(f, "Invalid processing spec: {}", msg),
            CompileError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<GenError> for CompileError {
    fn from(err: GenError) -> Self {
        CompileError::Gen(err)
    }
}

/// Compile a strut document to its HTML string.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    let html = generate(&ast)?;
    Ok(html)
}

/// Which pipeline artifact to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Tokens,
    Ast,
    Html,
}

/// How to render the selected artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Line-oriented text: `KIND(text)` for tokens, tag format for the AST
    Simple,
    Json,
}

/// A complete processing specification: stage plus format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a spec string like `"tokens-simple"` or `"ast-json"`.
    pub fn from_string(spec: &str) -> Result<Self, CompileError> {
        let Some((stage_str, format_str)) = spec.split_once('-') else {
            return Err(CompileError::InvalidSpec(spec.to_string()));
        };

        let stage = match stage_str {
            "tokens" => ProcessingStage::Tokens,
            "ast" => ProcessingStage::Ast,
            "html" => ProcessingStage::Html,
            _ => return Err(CompileError::InvalidSpec(spec.to_string())),
        };

        let format = match format_str {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(CompileError::InvalidSpec(spec.to_string())),
        };

        // The html stage is already a string; there is no json view of it.
        if stage == ProcessingStage::Html && format == OutputFormat::Json {
            return Err(CompileError::InvalidSpec(spec.to_string()));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Every spec `process` accepts.
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Html,
                format: OutputFormat::Simple,
            },
        ]
    }
}

/// Render the requested stage of `source` in the requested format.
pub fn process(source: &str, spec: &ProcessingSpec) -> Result<String, CompileError> {
    match spec.stage {
        ProcessingStage::Tokens => {
            let tokens = tokenize(source)?;
            match spec.format {
                OutputFormat::Simple => Ok(tokens
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")),
                OutputFormat::Json => serde_json::to_string_pretty(&tokens)
                    .map_err(|e| CompileError::Serialization(e.to_string())),
            }
        }
        ProcessingStage::Ast => {
            let ast = parse(&tokenize(source)?)?;
            match spec.format {
                OutputFormat::Simple => Ok(serialize_tag(&ast)),
                OutputFormat::Json => serde_json::to_string_pretty(&ast)
                    .map_err(|e| CompileError::Serialization(e.to_string())),
            }
        }
        ProcessingStage::Html => compile(source),
    }
}
