use crate::error::{GenError, Result};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Convert a snake_case identifier to camelCase.
///
/// The first component is kept verbatim. Every later component gets its first
/// character upper-cased and the rest lower-cased. Empty components (from
/// leading, trailing or doubled underscores) contribute nothing, so `_foo`
/// becomes `Foo` and `a__b_` becomes `aB`.
pub fn to_camel_case(snake: &str) -> String {
    let mut parts = snake.split('_');
    let mut out = String::with_capacity(snake.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// The enum discriminant for an identifier: the identifier upper-cased.
pub fn discriminant(identifier: &str) -> String {
    identifier.to_ascii_uppercase()
}

/// Include-guard token for a header, e.g. `guard_name("CLI_ACTIONS", "shut_down")`
/// gives `CLI_ACTIONS_SHUT_DOWN_H`.
///
/// Runs of `_` collapse to one and edge underscores are dropped, so the token
/// never contains `__`.
pub fn guard_name(prefix: &str, stem: &str) -> String {
    let body = stem
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{prefix}_{}_H", body.to_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Identifier validation
// ---------------------------------------------------------------------------

static IDENT_RE: OnceLock<Regex> = OnceLock::new();

fn ident_re() -> &'static Regex {
    IDENT_RE.get_or_init(|| Regex::new(r"^[a-z0-9_]+$").expect("identifier regex is valid"))
}

pub fn validate_identifier(identifier: &str) -> Result<()> {
    if !ident_re().is_match(identifier) {
        return Err(GenError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "shut_down",
        "make_table",
        "show_table",
        "list_tables",
        "a",
        "x1_y2",
        "list_all_the_things",
        "double__underscore",
        "trailing_",
        "v2_api",
    ];

    #[test]
    fn converts_builtin_actions() {
        assert_eq!(to_camel_case("shut_down"), "shutDown");
        assert_eq!(to_camel_case("make_table"), "makeTable");
        assert_eq!(to_camel_case("show_table"), "showTable");
        assert_eq!(to_camel_case("list_tables"), "listTables");
    }

    #[test]
    fn camel_case_has_no_underscores_and_keeps_first_char() {
        for id in SAMPLES {
            let cc = to_camel_case(id);
            assert!(!cc.contains('_'), "underscore left in {cc} (from {id})");
            assert_eq!(cc.chars().next(), id.chars().next(), "first char changed for {id}");
        }
    }

    #[test]
    fn no_underscore_is_identity() {
        for s in ["shutdown", "makeTable", "Already", "x", ""] {
            assert_eq!(to_camel_case(s), s);
        }
    }

    #[test]
    fn empty_components_contribute_nothing() {
        assert_eq!(to_camel_case("double__underscore"), "doubleUnderscore");
        assert_eq!(to_camel_case("trailing_"), "trailing");
        assert_eq!(to_camel_case("a___b"), "aB");
    }

    #[test]
    fn leading_underscore_is_well_defined() {
        assert_eq!(to_camel_case("_foo"), "Foo");
        assert_eq!(to_camel_case("_"), "");
        assert_eq!(to_camel_case("__"), "");
    }

    #[test]
    fn later_components_are_lowercased_after_first_char() {
        assert_eq!(to_camel_case("make_TABLE"), "makeTable");
        assert_eq!(to_camel_case("Make_table"), "MakeTable");
    }

    #[test]
    fn digits_are_left_alone() {
        assert_eq!(to_camel_case("v2_api"), "v2Api");
        assert_eq!(to_camel_case("x1_2y"), "x12y");
    }

    #[test]
    fn discriminant_uppercases() {
        assert_eq!(discriminant("shut_down"), "SHUT_DOWN");
        assert_eq!(discriminant("v2_api"), "V2_API");
    }

    #[test]
    fn guard_names() {
        assert_eq!(guard_name("CLI_ACTIONS", "shut_down"), "CLI_ACTIONS_SHUT_DOWN_H");
        assert_eq!(guard_name("CLI", "database_action"), "CLI_DATABASE_ACTION_H");
        assert_eq!(guard_name("CLI_ACTIONS", "trailing_"), "CLI_ACTIONS_TRAILING_H");
        assert_eq!(guard_name("CLI_ACTIONS", "_foo"), "CLI_ACTIONS_FOO_H");
        assert_eq!(guard_name("CLI_ACTIONS", "a__b"), "CLI_ACTIONS_A_B_H");
    }

    #[test]
    fn valid_identifiers() {
        for id in SAMPLES {
            validate_identifier(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
        validate_identifier("_foo").unwrap();
    }

    #[test]
    fn invalid_identifiers() {
        for id in ["", "Shut_down", "has space", "dash-ed", "ümlaut", "semi;colon"] {
            assert!(validate_identifier(id).is_err(), "expected invalid: {id}");
        }
    }
}
