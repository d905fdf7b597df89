use crate::types::Weight;

/// Distance of a vertex with no finite path from the source.
pub const UNREACHABLE: Weight = Weight::INFINITY;

/// Distance obtained by extending a path of length `dist_u` with an edge of `weight`.
///
/// An unreachable tail stays unreachable, so the sentinel is never summed with
/// a finite weight.
#[inline]
pub fn extend(dist_u: Weight, weight: Weight) -> Weight {
    if dist_u == UNREACHABLE {
        return UNREACHABLE;
    }
    dist_u + weight
}

/// Relaxation step: stores `candidate` in `current` if it is strictly shorter.
///
/// Returns whether the stored distance changed.
#[inline]
pub fn relax(current: &mut Weight, candidate: Weight) -> bool {
    if candidate < *current {
        *current = candidate;
        return true;
    }
    false
}

/// Whether extending `dist_u` by `weight` would improve `dist_v`.
#[inline]
pub fn improves(dist_u: Weight, weight: Weight, dist_v: Weight) -> bool {
    extend(dist_u, weight) < dist_v
}

/// Edge weights have to be finite; NaN and infinities are rejected up front.
#[inline]
pub fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite()
}
