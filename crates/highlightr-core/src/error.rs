use highlightr_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building a markup engine.
pub enum MarkupError {
    #[error("markup tags cannot be empty")]
    /// An opening-tag prefix or closing tag was empty.
    EmptyTag,

    #[error("regex compile error: {0}")]
    /// A tag pattern failed to compile.
    Regex(#[from] regex::Error),
}

#[derive(Debug, Error)]
/// Command registry/executor error type.
pub enum CommandError {
    #[error("unknown command '{0}'")]
    /// No command is registered under this id.
    UnknownCommand(String),

    #[error("markup template for '{0}' has an empty prefix")]
    /// The template cannot be toggled.
    EmptyPrefix(String),

    #[error(transparent)]
    /// Building the strip engine failed.
    Markup(#[from] MarkupError),

    #[error(transparent)]
    /// Settings were rejected.
    Config(#[from] ConfigError),
}
