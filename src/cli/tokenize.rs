//! Script line tokenizer
//!
//! Splits a runner line into arguments on whitespace. Double quotes group
//! words, `\"` and `\\` are escapes inside quotes, and an unquoted `#` starts
//! a comment that runs to the end of the line.

use crate::error::{BudgetError, BudgetResult};

/// Split one script line into arguments
///
/// A blank or comment-only line gives an empty list.
pub fn split_line(line: &str) -> BudgetResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    // An argument is in progress (possibly an empty `""`)
    let mut started = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => in_quotes = false,
                '\\' => match chars.next() {
                    Some(escaped @ ('"' | '\\')) => current.push(escaped),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => current.push('\\'),
                },
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                started = true;
            }
            '#' if !started => break,
            c if c.is_whitespace() => {
                if started {
                    args.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            _ => {
                current.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        return Err(BudgetError::Parse("unterminated quote".into()));
    }
    if started {
        args.push(current);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(
            split_line("add-budget Food 100").unwrap(),
            vec!["add-budget", "Food", "100"]
        );
    }

    #[test]
    fn test_quoted_argument() {
        assert_eq!(
            split_line(r#"add-expense "Lunch with Sam" 12.50 --budget "Eating out""#).unwrap(),
            vec!["add-expense", "Lunch with Sam", "12.50", "--budget", "Eating out"]
        );
    }

    #[test]
    fn test_empty_quotes_are_an_argument() {
        assert_eq!(split_line(r#"add-budget "" 100"#).unwrap(), vec!["add-budget", "", "100"]);
    }

    #[test]
    fn test_escapes_inside_quotes() {
        assert_eq!(
            split_line(r#"add-expense "the \"big\" one" 5"#).unwrap(),
            vec!["add-expense", r#"the "big" one"#, "5"]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert!(split_line("").unwrap().is_empty());
        assert!(split_line("   ").unwrap().is_empty());
        assert!(split_line("# just a note").unwrap().is_empty());
        assert_eq!(split_line("list # show cards").unwrap(), vec!["list"]);
        assert_eq!(
            split_line(r##"add-expense "#1 fan" 3"##).unwrap(),
            vec!["add-expense", "#1 fan", "3"]
        );
    }

    #[test]
    fn test_hash_inside_word_is_literal() {
        assert_eq!(split_line("show Food#2").unwrap(), vec!["show", "Food#2"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = split_line(r#"add-budget "Food 100"#).unwrap_err();
        assert!(matches!(err, BudgetError::Parse(_)));
    }
}
