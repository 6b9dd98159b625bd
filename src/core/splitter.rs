/// Splits a block of CQL text into individual statements on top-level
/// semicolons. Semicolons inside `'...'` or `"..."` literals are kept as
/// literal characters; a quote preceded by a backslash never toggles string
/// state, even when that backslash is itself string content. Statements are
/// trimmed and blank segments dropped, so consecutive or trailing semicolons
/// produce nothing. Input that ends inside an open string is not an error:
/// whatever accumulated is flushed as the final statement and left for the
/// server to reject.
pub fn split_statements(input: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut buffer = String::new();
    let mut in_string = false;
    let mut delimiter = '\0';
    let mut previous: Option<char> = None;

    for ch in input.chars() {
        match ch {
            '\'' | '"' => {
                let escaped = previous == Some('\\');
                if !in_string && !escaped {
                    in_string = true;
                    delimiter = ch;
                } else if in_string && ch == delimiter && !escaped {
                    in_string = false;
                }
                buffer.push(ch);
            }
            ';' if !in_string => {
                let statement = buffer.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
        previous = Some(ch);
    }

    let statement = buffer.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }

    statements
}
