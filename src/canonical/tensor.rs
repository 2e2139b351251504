//! Fixed-shape classifier input

/// Side length of the square image the classifier was trained on.
pub const IMAGE_SIDE: u32 = 28;

/// Tensor layout: (batch, height, width, channels).
pub const TENSOR_SHAPE: [usize; 4] = [1, IMAGE_SIDE as usize, IMAGE_SIDE as usize, 1];

/// Number of elements in a canonical tensor.
pub const TENSOR_LEN: usize = (IMAGE_SIDE * IMAGE_SIDE) as usize;

/// Largest 8-bit intensity value.
pub const MAX_INTENSITY: f32 = 255.0;

/// A (1, 28, 28, 1) `f32` tensor in row-major order.
///
/// Every element is in `[0.0, 1.0]` and polarity is inverted relative to the
/// source image, so bright values mark the digit stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalTensor {
    data: Vec<f32>,
}

impl CanonicalTensor {
    /// All-zero tensor (an empty canvas after inversion of pure white).
    pub fn zeros() -> Self {
        Self {
            data: vec![0.0; TENSOR_LEN],
        }
    }

    /// Build from exactly `TENSOR_LEN` values already in `[0, 1]`.
    pub(crate) fn from_normalized(data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), TENSOR_LEN);
        debug_assert!(data.iter().all(|v| (0.0..=1.0).contains(v)));
        Self { data }
    }

    pub fn shape(&self) -> [usize; 4] {
        TENSOR_SHAPE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Value at `(row, col)` of the single channel, `None` off the canvas.
    pub fn pixel(&self, row: usize, col: usize) -> Option<f32> {
        let side = IMAGE_SIDE as usize;
        if row >= side || col >= side {
            return None;
        }
        self.data.get(row * side + col).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let tensor = CanonicalTensor::zeros();
        assert_eq!(tensor.shape(), [1, 28, 28, 1]);
        assert_eq!(tensor.as_slice().len(), 784);
        assert!(tensor.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_pixel_is_row_major() {
        let mut data = vec![0.0; TENSOR_LEN];
        data[28 + 3] = 0.5;
        let tensor = CanonicalTensor::from_normalized(data);
        assert_eq!(tensor.pixel(1, 3), Some(0.5));
        assert_eq!(tensor.pixel(3, 1), Some(0.0));
    }

    #[test]
    fn test_pixel_off_canvas() {
        let tensor = CanonicalTensor::zeros();
        assert_eq!(tensor.pixel(27, 27), Some(0.0));
        assert_eq!(tensor.pixel(0, 28), None);
        assert_eq!(tensor.pixel(28, 0), None);
        assert_eq!(tensor.pixel(usize::MAX, 0), None);
    }
}
