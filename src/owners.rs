//! CODEOWNERS-based ownership resolution.
//!
//! Pattern syntax and precedence (last matching rule wins) are the
//! `codeowners` crate's concern; this module only loads the ruleset and
//! picks a team label out of a matched rule's owner list.

use crate::errors::{Error, Result};
use codeowners::Owners;
use std::fs;
use std::path::Path;

/// Owner label for paths no team claims.
pub const UNOWNED: &str = "UNOWNED";

/// Load the ownership ruleset once at startup; immutable thereafter.
pub fn load_ruleset(path: &Path) -> Result<Owners> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("cannot read CODEOWNERS at {}: {e}", path.display()))
    })?;
    Ok(codeowners::from_reader(contents.as_bytes()))
}

/// Resolve the owning team for a report path.
///
/// The matched rule's owners are scanned in original order and the
/// first one starting with `team_prefix` wins, returned with the
/// prefix stripped. An empty prefix therefore selects the first owner
/// verbatim. Empty paths and unmatched paths resolve to [`UNOWNED`].
pub fn resolve_owner_team(path: &str, ruleset: &Owners, team_prefix: &str) -> String {
    if path.is_empty() {
        return UNOWNED.to_string();
    }

    ruleset
        .of(path)
        .and_then(|owners| {
            owners
                .iter()
                .map(|owner| owner.to_string())
                .find_map(|owner| owner.strip_prefix(team_prefix).map(str::to_string))
        })
        .unwrap_or_else(|| UNOWNED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn ruleset(contents: &str) -> Owners {
        codeowners::from_reader(contents.as_bytes())
    }

    #[test]
    fn empty_path_is_unowned_without_a_lookup() {
        let owners = ruleset("apps/** @acme/web\n");
        assert_eq!(resolve_owner_team("", &owners, "@acme/"), UNOWNED);
    }

    #[test]
    fn unmatched_path_is_unowned() {
        let owners = ruleset("apps/** @acme/web\n");
        assert_eq!(
            resolve_owner_team("libs/util/mod.rs", &owners, "@acme/"),
            UNOWNED
        );
    }

    #[test]
    fn matched_rule_without_prefixed_owner_is_unowned() {
        let owners = ruleset("apps/** alice@example.com @bob\n");
        assert_eq!(
            resolve_owner_team("apps/checkout/src/cart.ts", &owners, "@acme/"),
            UNOWNED
        );
    }

    #[test]
    fn first_prefixed_owner_wins_and_is_stripped() {
        let owners = ruleset("apps/** alice@example.com @acme/checkout @acme/platform\n");
        assert_eq!(
            resolve_owner_team("apps/checkout/src/cart.ts", &owners, "@acme/"),
            "checkout"
        );
    }

    #[test]
    fn empty_prefix_selects_the_first_owner_verbatim() {
        let owners = ruleset("apps/** alice@example.com @acme/checkout\n");
        assert_eq!(
            resolve_owner_team("apps/checkout/src/cart.ts", &owners, ""),
            "alice@example.com"
        );
    }

    #[test]
    fn later_rules_override_earlier_ones() {
        let owners = ruleset(indoc! {"
            apps/** @acme/web
            apps/checkout/** @acme/checkout
        "});
        assert_eq!(
            resolve_owner_team("apps/checkout/src/cart.ts", &owners, "@acme/"),
            "checkout"
        );
        assert_eq!(
            resolve_owner_team("apps/search/src/index.ts", &owners, "@acme/"),
            "web"
        );
    }

    #[test]
    fn missing_ruleset_file_is_a_configuration_error() {
        let err = load_ruleset(Path::new("/nonexistent/CODEOWNERS")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
