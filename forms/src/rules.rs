//! Validation rule factories.

/// Outcome of one rule applied to one field value: valid, or a message to
/// show next to the field.
pub type RuleResult = Result<(), String>;

/// Fails on empty input.
///
/// # Errors
///
/// Returns the message when the value is empty.
///
/// # Examples
///
/// ```
/// use itemdeck_forms::rules::required;
///
/// assert_eq!(required("hello"), Ok(()));
/// assert_eq!(required(""), Err("Required.".to_string()));
/// ```
pub fn required(value: &str) -> RuleResult {
    if value.is_empty() {
        Err("Required.".to_string())
    } else {
        Ok(())
    }
}

/// At most `n` characters. Empty input also fails, as violating the bound.
#[must_use]
pub fn max_length(n: usize) -> impl Fn(&str) -> RuleResult {
    move |value| {
        if !value.is_empty() && value.chars().count() <= n {
            Ok(())
        } else {
            Err(format!("Must be less than {n} characters."))
        }
    }
}

/// At least `n` characters. Empty input also fails.
#[must_use]
pub fn min_length(n: usize) -> impl Fn(&str) -> RuleResult {
    move |value| {
        if !value.is_empty() && value.chars().count() >= n {
            Ok(())
        } else {
            Err(format!("Must be more than {n} characters."))
        }
    }
}

/// Numeric upper bound. Input that does not parse as an integer fails.
#[must_use]
pub fn max(n: i64) -> impl Fn(&str) -> RuleResult {
    move |value| match parse_int(value) {
        Some(parsed) if parsed <= n => Ok(()),
        _ => Err(format!("Must be less than {n}.")),
    }
}

/// Numeric lower bound. Input that does not parse as an integer fails.
#[must_use]
pub fn min(n: i64) -> impl Fn(&str) -> RuleResult {
    move |value| match parse_int(value) {
        Some(parsed) if parsed >= n => Ok(()),
        _ => Err(format!("Must be more than {n}.")),
    }
}

/// Lenient integer parse matching what form fields deliver: leading
/// whitespace and an optional sign, then the longest digit prefix.
/// `"12abc"` parses as 12; `"abc"` does not parse.
fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: &str = &rest[..rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i)];
    let parsed: i64 = digits.parse().ok()?;
    Some(if negative { -parsed } else { parsed })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required("x"), Ok(()));
        assert_eq!(required("0"), Ok(())); // non-empty text is enough
        assert_eq!(required(""), Err("Required.".to_string()));
    }

    #[test]
    fn test_max_length() {
        let rule = max_length(5);
        assert_eq!(rule("hello"), Ok(()));
        let message = rule("hello!").unwrap_err();
        assert!(message.contains('5'), "message was {message:?}");
        assert!(rule("").is_err());
    }

    #[test]
    fn test_min_length() {
        let rule = min_length(3);
        assert_eq!(rule("abc"), Ok(()));
        assert!(rule("ab").is_err());
        assert!(rule("").is_err());
    }

    #[test]
    fn test_max_numeric() {
        let rule = max(10);
        assert_eq!(rule("10"), Ok(()));
        assert_eq!(rule("9"), Ok(()));
        assert!(rule("11").is_err());
        let message = rule("not a number").unwrap_err();
        assert!(message.contains("10"));
    }

    #[test]
    fn test_min_numeric() {
        let rule = min(18);
        assert_eq!(rule("18"), Ok(()));
        assert!(rule("17").is_err());
        assert!(rule("").is_err());
    }

    #[test]
    fn test_lenient_integer_prefix_parse() {
        // Form inputs behave like parseInt: digit prefix wins.
        assert_eq!(max(100)("12abc"), Ok(()));
        assert_eq!(min(0)("  42"), Ok(()));
        assert_eq!(min(-10)("-5"), Ok(()));
        assert!(max(100)("abc12").is_err());
    }

    #[test]
    fn test_rules_compose_at_the_call_site() {
        let rules: Vec<Box<dyn Fn(&str) -> RuleResult>> = vec![
            Box::new(required),
            Box::new(min_length(3)),
            Box::new(max_length(8)),
        ];

        let check = |value: &str| rules.iter().try_for_each(|rule| rule(value));
        assert_eq!(check("alice"), Ok(()));
        assert!(check("").is_err());
        assert!(check("toolongusername").is_err());
    }
}
