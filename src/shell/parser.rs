use crate::shell::ast::Invocation;

/// Splits a raw line into program and arguments.
///
/// Balanced quotes are honoured (`cat "about.txt"`). A line that does not
/// tokenize as shell words (e.g. a lone apostrophe) falls back to plain
/// whitespace splitting, so every input still reaches a handler.
/// `#` is an ordinary character here, never the start of a comment.
/// Returns `None` for blank input.
pub fn parse_command_line(cmd_str: &str) -> Option<Invocation> {
    let trimmed = cmd_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens = if trimmed.contains('#') {
        split_plain(trimmed)
    } else {
        match shell_words::split(trimmed) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::debug!("Falling back to whitespace split for {:?}: {}", trimmed, e);
                split_plain(trimmed)
            }
        }
    };

    let mut tokens = tokens.into_iter();
    let program = tokens.next()?;
    Some(Invocation {
        program,
        args: tokens.collect(),
    })
}

fn split_plain(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
