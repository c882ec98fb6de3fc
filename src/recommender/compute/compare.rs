/// Cosine similarity in [0, 1]
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
/// ||a|| = sqrt(Σ(a_i^2))
///
/// Never fails. Returns 0 when
/// - the lengths differ
/// - either vector has zero norm (no recognized attributes)
/// - the result is not finite
///
/// Non-finite elements count as 0.
/// The score is exactly symmetric and `similarity(a, a) == 1.0` for any non-zero `a`,
/// whatever its magnitude.
///
/// # Examples
/// ```
/// use genre_recommender::similarity;
/// assert_eq!(similarity(&[1.0_f32, 0.0], &[1.0, 0.0]), 1.0);
/// assert_eq!(similarity(&[1.0_f32, 0.0], &[0.0, 1.0]), 0.0);
/// assert_eq!(similarity(&[1.0_f32], &[1.0, 0.0]), 0.0);
/// ```
pub fn similarity<N>(a: &[N], b: &[N]) -> f64
where
    N: Copy + Into<f64>,
{
    if a.len() != b.len() {
        return 0.0;
    }
    let (dot, norm_a, norm_b) = accumulate(a, b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // sqrt(|a|^2 * |b|^2) instead of sqrt(|a|^2) * sqrt(|b|^2):
    // for a == b the division is exact
    let score = dot / (norm_a * norm_b).sqrt();
    if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 }
}

/// (dot, |a|^2, |b|^2) over both vectors rescaled to unit magnitude
/// so the squared sums stay far from overflow and underflow
#[inline]
fn accumulate<N>(a: &[N], b: &[N]) -> (f64, f64, f64)
where
    N: Copy + Into<f64>,
{
    let scale_a = Pow2Scale::of(a);
    let scale_b = Pow2Scale::of(b);
    a.iter().zip(b).fold((0_f64, 0_f64, 0_f64), |(dot, na, nb), (&x, &y)| {
        let x = scale_a.apply(finite_or_zero(x.into()));
        let y = scale_b.apply(finite_or_zero(y.into()));
        (dot + x * y, na + x * x, nb + y * y)
    })
}

/// Power-of-two factor bringing the largest element near 1
/// Cosine is scale invariant and power-of-two products are exact,
/// so scores are unchanged. Split in two factors so 2^1074 never overflows.
#[derive(Debug, Clone, Copy)]
struct Pow2Scale(f64, f64);

impl Pow2Scale {
    fn of<N>(v: &[N]) -> Self
    where
        N: Copy + Into<f64>,
    {
        let max = v
            .iter()
            .map(|&x| finite_or_zero(x.into()).abs())
            .fold(0_f64, f64::max);
        if max == 0.0 {
            return Pow2Scale(1.0, 1.0);
        }
        let k = max.log2().round() as i32;
        let half = k / 2;
        Pow2Scale(2_f64.powi(-half), 2_f64.powi(half - k))
    }

    #[inline(always)]
    fn apply(self, x: f64) -> f64 {
        x * self.0 * self.1
    }
}

#[inline(always)]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
