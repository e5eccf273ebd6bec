// src/suggest.rs
//! Alternative username generation.
//!
//! Candidates are the base name with a positive integer appended (`name1`,
//! `name2`, ...) in increasing order, optionally followed by the base name
//! with every `_` replaced by `.`. The suffix space is unbounded, so the
//! search always terminates against a finite set of taken names; a caller
//! that asks for a huge bound against a densely populated suffix range pays
//! for it in time.

/// The underscore-to-dot variant of `base`. Equal to `base` when it has no `_`.
pub fn dot_variant(base: &str) -> String {
    base.replace('_', ".")
}

/// Numeric-suffix candidates for `base`, starting at 1. Never ends.
pub fn numeric_candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    (1u64..).map(move |suffix| format!("{base}{suffix}"))
}

/// Collect up to `max` free alternatives for `base`, probing with `is_taken`.
///
/// When the dot variant differs from `base` and is free, the last slot is
/// kept for it; otherwise numeric candidates fill every slot and the dot
/// variant is still probed but no longer fits.
pub fn collect<F>(base: &str, max: usize, is_taken: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut out = Vec::with_capacity(max);
    if max == 0 {
        return out;
    }

    let dot = dot_variant(base);
    let reserve = dot != base && !is_taken(dot.as_str());
    let numeric_target = if reserve { max - 1 } else { max };

    let mut numbers = numeric_candidates(base).filter(|c| !is_taken(c.as_str()));
    out.extend(numbers.by_ref().take(numeric_target));

    if out.len() < max {
        if is_taken(dot.as_str()) {
            // registered since the first probe
            out.extend(numbers.take(max - out.len()));
        } else {
            out.push(dot);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_bound_probes_nothing() {
        let probes = std::cell::Cell::new(0);
        let out = collect("admin", 0, |_| {
            probes.set(probes.get() + 1);
            true
        });
        assert!(out.is_empty());
        assert_eq!(probes.get(), 0);
    }

    #[test]
    fn reserves_last_slot_for_dot_variant() {
        let set = taken(&["john_doe"]);
        let out = collect("john_doe", 5, |c| set.contains(c));
        assert_eq!(
            out,
            vec!["john_doe1", "john_doe2", "john_doe3", "john_doe4", "john.doe"]
        );
    }

    #[test]
    fn skips_taken_suffixes() {
        let set = taken(&["a1", "a2"]);
        assert_eq!(collect("a", 2, |c| set.contains(c)), vec!["a3", "a4"]);
    }

    #[test]
    fn taken_dot_variant_is_replaced_by_numbers() {
        let set = taken(&["john_doe", "john.doe", "john_doe2"]);
        let out = collect("john_doe", 3, |c| set.contains(c));
        assert_eq!(out, vec!["john_doe1", "john_doe3", "john_doe4"]);
    }

    #[test]
    fn single_slot_goes_to_dot_variant() {
        let set = taken(&["a_b"]);
        assert_eq!(collect("a_b", 1, |c| set.contains(c)), vec!["a.b"]);
    }

    #[test]
    fn dot_variant_taken_between_probes_falls_back_to_numbers() {
        // first probe of "x.y" reports free, the second reports taken
        let seen = std::cell::Cell::new(false);
        let out = collect("x_y", 2, |c| {
            c == "x.y" && seen.replace(true)
        });
        assert_eq!(out, vec!["x_y1", "x_y2"]);
    }

    #[test]
    fn empty_base_yields_bare_numbers() {
        assert_eq!(collect("", 3, |_| false), vec!["1", "2", "3"]);
    }

    #[test]
    fn dot_variant_replaces_every_underscore() {
        assert_eq!(dot_variant("a_b__c"), "a.b..c");
        assert_eq!(dot_variant("plain"), "plain");
    }
}
