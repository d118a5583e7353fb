//! Classification of raw command line tokens into flags and values.

const FULL_PREFIX: &str = "--";
const SHORT_PREFIX: &str = "-";
const VALUE_DELIMITER: char = '=';

/// A single token, with its flag prefix (if any) stripped off.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Token<'t> {
    // --name, --name=value
    Full(&'t str),
    // -name, -name=value
    Short(&'t str),
    Value(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // "--" has to be checked first, any full flag also starts with "-"
        if let Some(body) = token.strip_prefix(FULL_PREFIX) {
            Token::Full(body)
        } else if let Some(body) = token.strip_prefix(SHORT_PREFIX) {
            Token::Short(body)
        } else {
            Token::Value(token)
        }
    }

    pub(crate) fn is_flag(&self) -> bool {
        !matches!(self, Token::Value(_))
    }

    /// The name we match registered arguments against. Values are returned as is.
    pub(crate) fn name(&self) -> &'t str {
        match *self {
            Token::Full(body) | Token::Short(body) => split_single(body).0,
            Token::Value(value) => value,
        }
    }

    /// The value after the first `=` of a flag, e.g `--user=root`.
    pub(crate) fn inline_value(&self) -> Option<&'t str> {
        match *self {
            Token::Full(body) | Token::Short(body) => body.split_once(VALUE_DELIMITER).map(|(_, value)| value),
            Token::Value(_) => None,
        }
    }
}

#[cfg(test)]
fn is_full_arg(token: &str) -> bool {
    matches!(Token::classify(token), Token::Full(_))
}

#[cfg(test)]
fn is_short_arg(token: &str) -> bool {
    matches!(Token::classify(token), Token::Short(_))
}

pub(crate) fn is_arg(token: &str) -> bool {
    Token::classify(token).is_flag()
}

/// splits on the first delimiter only, everything after it (including further delimiters) is the value.
/// Without a delimiter the whole input is the name and the value is empty.
pub(crate) fn split_single(token: &str) -> (&str, &str) {
    token.split_once(VALUE_DELIMITER).unwrap_or((token, ""))
}

#[cfg(test)]
fn arg_name(token: &str) -> &str {
    Token::classify(token).name()
}

#[cfg(test)]
mod tests {
    use super::{arg_name, is_arg, is_full_arg, is_short_arg, split_single, Token};
    use pretty_assertions::assert_eq;

    fn check(cases: &[(&str, bool)], f: fn(&str) -> bool) {
        for (token, expected) in cases {
            assert_eq!(*expected, f(token), "token {:?}", token);
        }
    }

    logged_test!(test_is_arg() {
        check(
            &[
                ("hello", false),
                ("--hello", true),
                ("----hello", true),
                ("--hello--world", true),
                ("-hello", true),
                ("-hello---world", true),
                ("", false),
            ],
            is_arg,
        );
    });

    logged_test!(test_is_full_arg() {
        check(
            &[
                ("hello", false),
                ("--hello", true),
                ("----hello", true),
                ("--hello--world", true),
                ("-hello", false),
                ("-hello---world", false),
            ],
            is_full_arg,
        );
    });

    logged_test!(test_double_dash_is_never_short() {
        check(
            &[
                ("hello", false),
                ("--hello", false),
                ("----hello", false),
                ("--hello--world", false),
                ("----hello---world", false),
                ("-hello", true),
                ("-hello---world-ok", true),
            ],
            is_short_arg,
        );
    });

    logged_test!(test_split_single() {
        assert_eq!(("", ""), split_single(""));
        assert_eq!(("-hello", ""), split_single("-hello"));
        assert_eq!(("--hello", ""), split_single("--hello"));
        assert_eq!(("--hello", "1234"), split_single("--hello=1234"));
        assert_eq!(("--hello-world", "===1234"), split_single("--hello-world====1234"));
        assert_eq!(("--empty", ""), split_single("--empty="));
    });

    logged_test!(test_arg_name() {
        assert_eq!("not-an-argument", arg_name("not-an-argument"));
        assert_eq!("hello", arg_name("-hello"));
        assert_eq!("hello", arg_name("--hello"));
        assert_eq!("--hello--world", arg_name("----hello--world"));
        assert_eq!("hello--world--", arg_name("-hello--world--"));
        assert_eq!("with-value", arg_name("--with-value=hello"));
        assert_eq!("wv", arg_name("-wv=hello"));
        assert_eq!("", arg_name("-"));
        assert_eq!("", arg_name("--"));
    });

    logged_test!(test_inline_value() {
        assert_eq!(Some("oklookat"), Token::classify("--name=oklookat").inline_value());
        assert_eq!(Some("a=b"), Token::classify("-n=a=b").inline_value());
        assert_eq!(Some(""), Token::classify("--name=").inline_value());
        assert_eq!(None, Token::classify("--name").inline_value());
        // values never carry an inline value, even with a delimiter in them
        assert_eq!(None, Token::classify("key=value").inline_value());
    });
}
