//! Text rendering for diagnostics.
//!
//! Everything here works on plain strings so the container can feed it
//! service ids and type names alike.

use std::fmt::Display;

/// Joins a resolution chain with arrows.
///
/// # Examples
/// ```
/// use sanduq_support::rendering::render_chain;
///
/// let chain = ["UserController", "UserService", "UserController"];
/// assert_eq!(render_chain(&chain), "UserController → UserService → UserController");
/// ```
pub fn render_chain<T: Display>(chain: &[T]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Strips module paths from a fully qualified type name.
///
/// ```
/// use sanduq_support::rendering::shorten_type_name;
///
/// assert_eq!(shorten_type_name("app::users::UserService"), "UserService");
/// assert_eq!(
///     shorten_type_name("alloc::sync::Arc<dyn app::log::Logger>"),
///     "Arc<dyn Logger>"
/// );
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    let mut out = String::with_capacity(full_name.len());
    let mut segment = String::new();
    let mut chars = full_name.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' => {
                out.push_str(&segment);
                out.push(ch);
                segment.clear();
            }
            _ => segment.push(ch),
        }
    }

    out.push_str(&segment);
    out
}

/// Picks up to `limit` entries of `available` that look like `requested`.
///
/// Substring hits rank first, then matches on the short type name, then
/// entries sharing a prefix of at least three characters. Comparison is
/// case-insensitive.
pub fn suggest_similar(requested: &str, available: &[&str], limit: usize) -> Vec<String> {
    let wanted = requested.to_lowercase();
    let wanted_short = shorten_type_name(requested).to_lowercase();

    let mut scored: Vec<(&str, usize)> = available
        .iter()
        .filter_map(|&candidate| {
            let lower = candidate.to_lowercase();
            if lower.contains(&wanted) || wanted.contains(&lower) {
                return Some((candidate, 100));
            }

            let short = shorten_type_name(candidate).to_lowercase();
            if short.contains(&wanted_short) || wanted_short.contains(&short) {
                return Some((candidate, 80));
            }

            let prefix = common_prefix_len(&short, &wanted_short);
            (prefix >= 3).then_some((candidate, prefix * 10))
        })
        .collect();

    // stable: equal scores keep the order of `available`
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_of_three() {
        assert_eq!(render_chain(&["A", "B", "A"]), "A → B → A");
    }

    #[test]
    fn chain_of_one_and_none() {
        assert_eq!(render_chain(&["Logger"]), "Logger");
        let empty: [&str; 0] = [];
        assert_eq!(render_chain(&empty), "");
    }

    #[test]
    fn short_name_without_path() {
        assert_eq!(shorten_type_name("Widget"), "Widget");
    }

    #[test]
    fn short_name_with_generics_and_refs() {
        assert_eq!(
            shorten_type_name("core::option::Option<&app::db::Pool>"),
            "Option<&Pool>"
        );
    }

    #[test]
    fn suggests_typo() {
        let available = ["UserService", "UserRepository", "Logger"];
        let found = suggest_similar("UserServise", &available, 3);
        assert_eq!(found.first().map(String::as_str), Some("UserService"));
    }

    #[test]
    fn suggests_case_insensitive_substring() {
        let available = ["AuthController", "Database"];
        let found = suggest_similar("authcontroller", &available, 3);
        assert_eq!(found, vec!["AuthController".to_string()]);
    }

    #[test]
    fn no_suggestion_for_unrelated() {
        let available = ["Database"];
        assert!(suggest_similar("RateLimiter", &available, 3).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let found = suggest_similar("UserAdmin", &["UserAudit", "UserAccount"], 3);
        assert_eq!(found, ["UserAudit", "UserAccount"]);

        let found = suggest_similar("UserAdmin", &["UserAccount", "UserAudit"], 3);
        assert_eq!(found, ["UserAccount", "UserAudit"]);
    }

    #[test]
    fn respects_limit() {
        let available = ["UserA", "UserB", "UserC", "UserD"];
        assert_eq!(suggest_similar("User", &available, 2).len(), 2);
    }
}
