use log::debug;

use crate::Pattern;

pub(crate) fn matches(patterns: &[Pattern], candidate: &str, trace: bool) -> bool {
    if patterns.is_empty() {
        if trace {
            debug!("empty filter never matches {candidate:?}");
        }
        return false;
    }
    let result = match_from(patterns, candidate, 0, 0, trace);
    if trace {
        debug!("filter match of {candidate:?}: {result}");
    }
    result
}

/// Match `patterns[start..]` against `candidate[pos..]`.
///
/// Alternatives of one OR-group are tried in a loop, each from `pos`, so
/// only the step past a group boundary recurses.
fn match_from(
    patterns: &[Pattern],
    candidate: &str,
    start: usize,
    pos: usize,
    trace: bool,
) -> bool {
    // End of the OR-group `start` belongs to.
    let mut group_end = start;
    while !patterns[group_end].conjunctive && group_end + 1 < patterns.len() {
        group_end += 1;
    }
    let last_group = group_end + 1 == patterns.len();

    for (index, pattern) in (start..).zip(&patterns[start..=group_end]) {
        match candidate[pos..].find(pattern.text.as_str()) {
            None => {
                if trace {
                    debug!("clause {index} {:?} not found from {pos}", pattern.text);
                }
            }
            Some(offset) => {
                let found = pos + offset;
                if trace {
                    debug!("clause {index} {:?} found at {found}", pattern.text);
                }
                if last_group {
                    return true;
                }
                let resume = found + pattern.text.len();
                if match_from(patterns, candidate, group_end + 1, resume, trace) {
                    return true;
                }
                if trace {
                    debug!("continuation after clause {index} failed, backtracking to {pos}");
                }
            }
        }
    }
    false
}
