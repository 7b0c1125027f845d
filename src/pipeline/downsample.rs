/// Keeps every `stride`-th element starting at index 0, preserving order.
/// Returns ceil(len / stride) elements; stride 1 (or 0) is the identity.
pub fn downsample<T: Clone>(points: &[T], stride: usize) -> Vec<T> {
    if stride <= 1 {
        return points.to_vec();
    }
    points.iter().step_by(stride).cloned().collect()
}
