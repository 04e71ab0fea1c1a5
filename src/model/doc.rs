//! Documentation comment cleanup.

/// Strip comment delimiters and leading `*` gutters from a doc comment.
///
/// `/** Adds two numbers.\n * @param a first */` becomes
/// `Adds two numbers.\n@param a first`. Text that is not a block comment is
/// returned trimmed.
pub fn clean_doc_comment(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(body) = trimmed
        .strip_prefix("/**")
        .and_then(|s| s.strip_suffix("*/"))
    else {
        return trimmed.to_string();
    };

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect();

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}
