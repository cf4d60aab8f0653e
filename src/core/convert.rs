//! Stateless conversions between identifier casing conventions.
//!
//! Every function here is total: any `&str` goes in, a fresh `String` comes
//! out. Separator insertion only reacts to ASCII `A-Z`; whole-string case
//! changes use the Unicode-aware `str` methods.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("invalid regex"));

// `.` in these patterns stops at line terminators, so spell the class out.
static UNDERSCORE_NEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^\n\r\x{2028}\x{2029}])").expect("invalid regex"));

static HYPHEN_NEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([^\n\r\x{2028}\x{2029}])").expect("invalid regex"));

static DOT_NEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([^\n\r\x{2028}\x{2029}])").expect("invalid regex"));

static LEADING_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\n\r\x{2028}\x{2029}]").expect("invalid regex"));

/// Puts `separator` in front of every ASCII uppercase letter and lowercases it.
fn split_on_upper(input: &str, separator: char) -> String {
    UPPER_RE
        .replace_all(input, |caps: &Captures<'_>| {
            format!("{separator}{}", caps[0].to_ascii_lowercase())
        })
        .into_owned()
}

/// Lowercases `input`, then drops each separator matched by `re` and
/// uppercases the character after it.
fn join_on_separator(re: &Regex, input: &str) -> String {
    let lowered = input.to_lowercase();
    re.replace_all(&lowered, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

fn with_first_char(
    input: &str,
    first: impl FnOnce(char) -> String,
    rest: impl FnOnce(&str) -> String,
) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) => {
            let mut out = first(c);
            out.push_str(&rest(chars.as_str()));
            out
        }
        None => String::new(),
    }
}

/// `helloWorld` -> `hello_world`.
///
/// A leading uppercase letter yields a leading underscore: `HelloWorld` ->
/// `_hello_world`.
pub fn camel_to_snake(input: &str) -> String {
    split_on_upper(input, '_')
}

/// `hello_world` -> `helloWorld`. The whole input is lowercased first.
pub fn snake_to_camel(input: &str) -> String {
    join_on_separator(&UNDERSCORE_NEXT_RE, input)
}

/// `helloWorld` -> `HelloWorld`. Only the first character is touched.
pub fn camel_to_pascal(input: &str) -> String {
    with_first_char(input, |c| c.to_uppercase().collect(), str::to_owned)
}

/// `HelloWorld` -> `helloWorld`. Only the first character is touched.
pub fn pascal_to_camel(input: &str) -> String {
    with_first_char(input, |c| c.to_lowercase().collect(), str::to_owned)
}

/// `helloWorld` -> `hello-world`.
pub fn camel_to_kebab(input: &str) -> String {
    split_on_upper(input, '-')
}

/// `hello-world` -> `helloWorld`.
pub fn kebab_to_camel(input: &str) -> String {
    join_on_separator(&HYPHEN_NEXT_RE, input)
}

/// `helloWorld` -> `HELLO_WORLD`.
pub fn camel_to_upper_snake(input: &str) -> String {
    camel_to_snake(input).to_uppercase()
}

/// `HELLO_WORLD` -> `helloWorld`.
pub fn upper_snake_to_camel(input: &str) -> String {
    snake_to_camel(&input.to_lowercase())
}

pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}

pub fn to_upper_case(input: &str) -> String {
    input.to_uppercase()
}

/// `helloWorld` -> `Hello World`.
///
/// A space goes in front of every ASCII uppercase letter (so `HelloWorld`
/// becomes ` Hello World`), then the first character is uppercased.
pub fn camel_to_title(input: &str) -> String {
    let spaced = UPPER_RE.replace_all(input, " $0");
    LEADING_CHAR_RE
        .replace(&spaced, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// `hello World` -> `Hello world`.
pub fn to_sentence_case(input: &str) -> String {
    with_first_char(input, |c| c.to_uppercase().collect(), str::to_lowercase)
}

/// `helloWorld` -> `hello.world`.
pub fn camel_to_dot_notation(input: &str) -> String {
    split_on_upper(input, '.')
}

/// `hello.world` -> `helloWorld`.
pub fn dot_notation_to_camel(input: &str) -> String {
    join_on_separator(&DOT_NEXT_RE, input)
}
