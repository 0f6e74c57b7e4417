/// Euclidean length of a vector, accumulated in f64.
pub fn norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
}

/// True when `v` has unit length within `tolerance`.
///
/// Provider vectors are assumed pre-normalized so that a dot product equals
/// cosine similarity. Nothing enforces this; if it does not hold, scores
/// drift silently.
pub fn is_unit_norm(v: &[f32], tolerance: f64) -> bool {
    (norm(v) - 1.0).abs() <= tolerance
}

pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum()
}

pub fn is_finite(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite())
}
