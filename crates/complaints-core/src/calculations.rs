use std::collections::HashMap;

// ── ConcentrationCalculator ───────────────────────────────────────────────────

/// Stateless collection of market-concentration calculations.
pub struct ConcentrationCalculator;

impl ConcentrationCalculator {
    /// Count how often each company string occurs.
    ///
    /// Names are compared by exact string equality: no case folding, no
    /// trimming.
    pub fn company_frequency<S: AsRef<str>>(companies: &[S]) -> HashMap<&str, u64> {
        let mut freq: HashMap<&str, u64> = HashMap::new();
        for company in companies {
            *freq.entry(company.as_ref()).or_insert(0) += 1;
        }
        freq
    }

    /// Share of `max_count` in `total`, as a percentage rounded to the
    /// nearest integer with ties going to the even neighbour.
    ///
    /// The division is carried out on integers so `.5` boundaries are exact:
    /// `1/8` (12.5%) rounds to 12 and `3/8` (37.5%) rounds to 38. Computing
    /// `(max / total) * 100` on floats instead would shift some of these
    /// ties, e.g. `23/40` would land on 57 rather than 58.
    ///
    /// Returns `None` when `total` is 0 or `max_count` exceeds `total`.
    pub fn highest_percent(max_count: u64, total: u64) -> Option<u64> {
        if total == 0 || max_count > total {
            return None;
        }
        let scaled = max_count * 100;
        let quotient = scaled / total;
        let twice_remainder = (scaled % total) * 2;

        let rounded = if twice_remainder > total
            || (twice_remainder == total && quotient % 2 == 1)
        {
            quotient + 1
        } else {
            quotient
        };
        Some(rounded)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
