//! Longest common substring.

/// Location of the longest common substring of two sequences.
///
/// Offsets are exclusive ends, so the run is `a[end_a - len..end_a]` and
/// `b[end_b - len..end_b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonRun {
    pub end_a: usize,
    pub end_b: usize,
    pub len: usize,
}

impl CommonRun {
    /// Start of the run in `a`
    #[must_use]
    pub fn start_a(&self) -> usize {
        self.end_a - self.len
    }

    /// Start of the run in `b`
    #[must_use]
    pub fn start_b(&self) -> usize {
        self.end_b - self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Find the longest common contiguous run of `a` and `b`.
///
/// Every pair of positions is compared (quadratic time). Only the previous
/// row of the dynamic-programming table is kept, so memory is linear in
/// `b.len()`. When several runs share the maximum length, the first one met
/// scanning `a` outer and `b` inner wins. Without any shared symbol the
/// result is all zeros.
///
/// # Examples
///
/// ```
/// use hgvs_describe::describe::lcs::longest_common_substring;
///
/// let run = longest_common_substring(b"ACGTACGT", b"TTACGAAACGT");
/// assert_eq!((run.end_a, run.end_b, run.len), (4, 11, 4));
/// ```
#[must_use]
pub fn longest_common_substring(a: &[u8], b: &[u8]) -> CommonRun {
    let mut best = CommonRun::default();
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for x in 1..=a.len() {
        for y in 1..=b.len() {
            if a[x - 1] == b[y - 1] {
                current[y] = previous[y - 1] + 1;
                if current[y] > best.len {
                    best = CommonRun {
                        end_a: x,
                        end_b: y,
                        len: current[y],
                    };
                }
            } else {
                current[y] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
