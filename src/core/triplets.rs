use crate::domain::model::Triplet;

/// Every `(x, y, z)` with `x < y < z`, `x² + y² = z²` and `x + y + z <= max_sum`,
/// ordered by `x`, then `y`.
pub fn find_triplets(max_sum: u64) -> Vec<Triplet> {
    let mut triplets = Vec::new();

    for x in 1..max_sum.saturating_sub(1) {
        for y in (x + 1)..max_sum {
            let z_sq = x * x + y * y;
            let z = isqrt(z_sq);
            if z * z == z_sq && z > y && x + y + z <= max_sum {
                triplets.push(Triplet { x, y, z });
            }
        }
    }

    tracing::debug!(max_sum, found = triplets.len(), "triplet search finished");
    triplets
}

/// Floor of the square root. The float estimate is corrected with integer
/// arithmetic, so the result is exact for every `u64`.
fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}
