use anyhow::Result;
use ndarray::Array2;

/// Model input, wrapper over [`Array2<f32>`]: one normalized grayscale
/// plane, row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormTensor(pub Array2<f32>);

impl From<Array2<f32>> for NormTensor {
    fn from(x: Array2<f32>) -> Self {
        Self(x)
    }
}

impl std::ops::Deref for NormTensor {
    type Target = Array2<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl NormTensor {
    pub fn from_shape_vec(height: usize, width: usize, xs: Vec<f32>) -> Result<Self> {
        Ok(Self(Array2::from_shape_vec((height, width), xs)?))
    }

    pub fn height(&self) -> usize {
        self.0.nrows()
    }

    pub fn width(&self) -> usize {
        self.0.ncols()
    }
}
