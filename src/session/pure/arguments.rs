//! Game argument splitting

/// Split a configured argument string into separate arguments.
///
/// Whitespace separates arguments; double quotes group text containing
/// spaces and are removed. `""` yields an empty argument. No shell expansion
/// of any kind happens.
pub fn split_arguments(args: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in args.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        out.push(current);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_no_arguments() {
        assert!(split_arguments("").is_empty());
        assert!(split_arguments("   \t ").is_empty());
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            split_arguments("-novid  -console\t+map de_dust2"),
            vec!["-novid", "-console", "+map", "de_dust2"]
        );
    }

    #[test]
    fn quotes_group_spaces() {
        assert_eq!(
            split_arguments(r#"-name "Player One" -x"#),
            vec!["-name", "Player One", "-x"]
        );
    }

    #[test]
    fn quotes_inside_token_are_removed() {
        assert_eq!(
            split_arguments(r#"--save="My Saves/slot 1""#),
            vec!["--save=My Saves/slot 1"]
        );
    }

    #[test]
    fn empty_quotes_give_empty_argument() {
        assert_eq!(split_arguments(r#"-a "" -b"#), vec!["-a", "", "-b"]);
    }

    #[test]
    fn shell_characters_are_literal() {
        assert_eq!(
            split_arguments("$HOME;rm|cat"),
            vec!["$HOME;rm|cat"]
        );
    }
}
