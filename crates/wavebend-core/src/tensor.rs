//! Dense numeric tensors used as inference graph input/output.
//!
//! Flat row-major `f32` storage with an explicit shape: rank 1 for scalar
//! parameters, rank 2 (`[channels, samples]`) for audio.

use crate::error::{CoreError, Result};

/// Dense rectangular numeric array.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Vec<usize>,
}

impl Tensor {
    /// A 1-element rank-1 tensor, shape `[1]`.
    pub fn scalar(value: f32) -> Self {
        Self {
            data: vec![value],
            shape: vec![1],
        }
    }

    /// A zero-filled rank-2 tensor, shape `[rows, cols]`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            shape: vec![rows, cols],
        }
    }

    /// Build a rank-2 tensor from flat row-major data.
    pub fn from_rows(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(CoreError::InvalidData(format!(
                "data length {} does not match shape [{}, {}]",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            data,
            shape: vec![rows, cols],
        })
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Size of one axis.
    ///
    /// # Panics
    /// Panics if `axis` is out of range.
    pub fn dim(&self, axis: usize) -> usize {
        self.shape[axis]
    }

    /// Flat row-major view of the data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// One row of a rank-2 tensor.
    ///
    /// # Panics
    /// Panics if the tensor is not rank 2 or `index` is out of range.
    pub fn row(&self, index: usize) -> &[f32] {
        debug_assert_eq!(self.rank(), 2, "row access requires a rank-2 tensor");
        let cols = self.shape[1];
        &self.data[index * cols..(index + 1) * cols]
    }

    /// Sample-wise arithmetic mean across rows, keeping rank 2.
    ///
    /// A `[rows, cols]` tensor becomes `[1, cols]`. A tensor with zero rows
    /// averages to silence.
    pub fn mean_rows(&self) -> Tensor {
        debug_assert_eq!(self.rank(), 2, "mean_rows requires a rank-2 tensor");
        let rows = self.shape[0];
        let cols = self.shape[1];
        if rows == 0 {
            return Tensor::zeros(1, cols);
        }
        let mut mean = vec![0.0f32; cols];
        for row in 0..rows {
            for (acc, &sample) in mean.iter_mut().zip(self.row(row)) {
                *acc += sample;
            }
        }
        let scale = 1.0 / rows as f32;
        for acc in &mut mean {
            *acc *= scale;
        }
        Tensor {
            data: mean,
            shape: vec![1, cols],
        }
    }
}
