//! Freshness resolution
//!
//! Selecting the most-recent fact for a code within a window. Facts with
//! no effective time never participate.
//!
//! Tie-break contract: when two qualifying facts share exactly the same
//! effective time, the one occurring later in the input sequence wins.
//! This is an explicit, tested contract (the reference system was
//! inconsistent about it); callers that need a different rule must
//! disambiguate upstream.

use ventharms_model::Fact;

use crate::window::TimeWindow;

fn qualifies(fact: &Fact, code: &str, window: Option<&TimeWindow>) -> bool {
    if !fact.matches(code) {
        return false;
    }
    match fact.effective_time {
        None => false,
        Some(t) => window.map(|w| w.contains(t)).unwrap_or(true),
    }
}

/// The fact with the maximum effective time matching `code` inside
/// `window` (or anywhere in time when `window` is `None`).
pub fn find_freshest<'a>(
    facts: &'a [Fact],
    code: &str,
    window: Option<&TimeWindow>,
) -> Option<&'a Fact> {
    facts
        .iter()
        .filter(|f| qualifies(f, code, window))
        // max_by_key keeps the last maximum, which is the tie-break
        // contract: later in input wins on equal timestamps.
        .max_by_key(|f| f.effective_time)
}

/// All facts matching `code` inside `window`, ordered ascending by
/// effective time. The sort is stable, so same-instant facts keep their
/// input order.
pub fn list_matching<'a>(
    facts: &'a [Fact],
    code: &str,
    window: Option<&TimeWindow>,
) -> Vec<&'a Fact> {
    let mut matched: Vec<&Fact> = facts
        .iter()
        .filter(|f| qualifies(f, code, window))
        .collect();
    matched.sort_by_key(|f| f.effective_time);
    matched
}

/// The freshest fact across several codes, together with the code that
/// won. Used by mode-inference dispatch, which must know which signal
/// family is freshest.
pub fn freshest_of<'a>(
    facts: &'a [Fact],
    codes: &[&'static str],
    window: Option<&TimeWindow>,
) -> Option<(&'static str, &'a Fact)> {
    let mut best: Option<(&'static str, &'a Fact)> = None;
    for code in codes {
        if let Some(fact) = find_freshest(facts, code, window) {
            // >= keeps the later code on ties, matching the contract's
            // later-wins direction across the caller's code order.
            let better = match best {
                None => true,
                Some((_, current)) => fact.effective_time >= current.effective_time,
            };
            if better {
                best = Some((code, fact));
            }
        }
    }
    best
}
