//! Character-level similarity using gestalt (Ratcliff/Obershelp) matching.
//!
//! The longest common contiguous block of the two strings is located, then
//! the unmatched regions to its left and right are matched the same way. The
//! ratio is `2 * matched / (len(a) + len(b))`.
//!
//! Comparison is case-sensitive and works on Unicode scalar values. No
//! "junk" heuristic is applied; column names are far too short for
//! popularity-based junk detection to matter.

/// Returns the gestalt similarity ratio of `a` and `b` in `[0, 1]`.
///
/// Two empty strings have nothing to mismatch and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Total number of characters covered by matching blocks.
pub fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        if block.a + block.size < ahi && block.b + block.size < bhi {
            pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
        }
    }
    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    size: usize,
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long blocks the one ending first in `a`, then first in `b`,
/// wins.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        size: 0,
    };
    let width = bhi.saturating_sub(blo);
    // prev[j + 1] = length of the common run ending at a[i - 1], b[blo + j]
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let run = prev[slot - 1] + 1;
                curr[slot] = run;
                if run > best.size {
                    best = Block {
                        a: i + 1 - run,
                        b: j + 1 - run,
                        size: run,
                    };
                }
            } else {
                curr[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}
