//! Debug commands: `parse` and `lex` for inspecting the front end.

use quill_diagnostic::emitter::DiagnosticEmitter;
use quill_fmt::dump_module;
use quill_ir::{StringInterner, Token, TokenKind};
use quill_lexer::{tokenize, LexerConfig};
use quill_parse::parse_source;

use super::{read_file, stderr_emitter, Status};
use crate::CliResult;

/// Parse a file and print its syntax tree.
///
/// Statements parsed before a syntax error are still printed.
pub fn parse_file(path: &str) -> CliResult<Status> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let output = parse_source(&source, &interner);
    print!("{}", dump_module(&output.module, &output.arena, &interner));

    let Some(error) = &output.error else {
        return Ok(Status::Success);
    };
    let mut emitter = stderr_emitter(path, &source);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
    Ok(Status::Failure)
}

/// Lex a file and print one token per line.
pub fn lex_file(path: &str) -> CliResult<Status> {
    let source = read_file(path)?;
    let config = LexerConfig::quill();
    let mut status = Status::Success;
    for token in tokenize(&source, &config) {
        if matches!(token.kind, TokenKind::Invalid(_)) {
            status = Status::Failure;
        }
        println!("{}", describe_token(&token));
    }
    Ok(status)
}

/// `row:col KIND 'lexeme'`, with the lex error appended for invalid tokens.
pub(crate) fn describe_token(token: &Token<'_>) -> String {
    let mut line = format!(
        "{} {} '{}'",
        token.loc,
        token.kind.label(),
        token.lexeme.escape_debug()
    );
    if let TokenKind::Invalid(error) = token.kind {
        line.push_str(&format!(" ({error})"));
    }
    line
}
