//! Dense vector primitives for centroid scoring.

/// L2 norm (magnitude) of a vector.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity between two dense vectors.
///
/// Returns 0.0 when either vector has zero magnitude; the classifier treats
/// that as "no signal" rather than an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let na = l2_norm(a);
    let nb = l2_norm(b);
    if na <= f32::EPSILON || nb <= f32::EPSILON {
        return 0.0;
    }
    dot / (na * nb)
}

/// Element-wise mean of a set of vectors (the centroid).
///
/// Returns `None` for an empty set. Vectors are assumed to share the
/// provider's fixed dimension.
pub fn mean_vector(vectors: &[Vec<f32>]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let mut out = vec![0.0f32; first.len()];
    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }
    let n = vectors.len() as f32;
    for acc in &mut out {
        *acc /= n;
    }
    Some(out)
}
