//! Flat-buffer n-dimensional raster.

use pixfill_core::{AxisType, DatasetId, ElementType, Raster, RasterError, RasterMut};
use smallvec::SmallVec;

/// A dense n-dimensional raster backed by one `Vec<f64>`.
///
/// Axis 0 is the fastest-varying in memory. Every stored value has
/// already been narrowed by the element type, so reads return exactly
/// what the native type would hold.
///
/// A clone is a new dataset: it copies the samples but takes a fresh
/// [`DatasetId`].
#[derive(Debug)]
pub struct DenseRaster {
    id: DatasetId,
    axes: SmallVec<[AxisType; 8]>,
    extents: SmallVec<[u64; 8]>,
    strides: SmallVec<[usize; 8]>,
    element: ElementType,
    data: Vec<f64>,
}

impl Clone for DenseRaster {
    fn clone(&self) -> Self {
        Self {
            id: DatasetId::next(),
            axes: self.axes.clone(),
            extents: self.extents.clone(),
            strides: self.strides.clone(),
            element: self.element,
            data: self.data.clone(),
        }
    }
}

impl DenseRaster {
    /// Create a zero-filled raster with the given `(axis, extent)` layout.
    ///
    /// Returns `Err(RasterError::EmptyRaster)` if there are no axes or any
    /// extent is 0, `Err(RasterError::DuplicateAxis)` if an axis type
    /// repeats, and `Err(RasterError::TooLarge)` if the sample count
    /// overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixfill_core::{AxisType, ElementType, Raster};
    /// use pixfill_raster::DenseRaster;
    ///
    /// let r = DenseRaster::new(
    ///     &[(AxisType::X, 4), (AxisType::Y, 3), (AxisType::Channel, 3)],
    ///     ElementType::U8,
    /// )
    /// .unwrap();
    /// assert_eq!(r.ndim(), 3);
    /// assert_eq!(r.get(&[3, 2, 1]).unwrap(), 0.0);
    /// ```
    pub fn new(layout: &[(AxisType, u64)], element: ElementType) -> Result<Self, RasterError> {
        if layout.is_empty() || layout.iter().any(|&(_, extent)| extent == 0) {
            return Err(RasterError::EmptyRaster);
        }
        for (i, (axis, _)) in layout.iter().enumerate() {
            if layout[..i].iter().any(|(prev, _)| prev == axis) {
                return Err(RasterError::DuplicateAxis {
                    axis: axis.to_string(),
                });
            }
        }

        let mut strides = SmallVec::with_capacity(layout.len());
        let mut total: usize = 1;
        for &(_, extent) in layout {
            strides.push(total);
            let extent = usize::try_from(extent).map_err(|_| RasterError::TooLarge)?;
            total = total.checked_mul(extent).ok_or(RasterError::TooLarge)?;
        }

        Ok(Self {
            id: DatasetId::next(),
            axes: layout.iter().map(|&(axis, _)| axis).collect(),
            extents: layout.iter().map(|&(_, extent)| extent).collect(),
            strides,
            element,
            data: vec![0.0; total],
        })
    }

    /// Start a [`DenseRasterBuilder`].
    pub fn builder() -> DenseRasterBuilder {
        DenseRasterBuilder {
            layout: Vec::new(),
            element: ElementType::U8,
            fill: 0.0,
        }
    }

    /// Set every sample to `value` (narrowed by the element type).
    pub fn fill(&mut self, value: f64) {
        let value = self.element.quantize(value);
        self.data.fill(value);
    }

    /// All samples in storage order (axis 0 fastest).
    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    /// Total number of samples.
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Flat buffer offset of `position`.
    pub fn offset(&self, position: &[i64]) -> Result<usize, RasterError> {
        self.check_position(position)?;
        Ok(position
            .iter()
            .zip(&self.strides)
            .map(|(&p, &stride)| p as usize * stride)
            .sum())
    }
}

impl Raster for DenseRaster {
    fn id(&self) -> DatasetId {
        self.id
    }

    fn axis_types(&self) -> &[AxisType] {
        &self.axes
    }

    fn extents(&self) -> &[u64] {
        &self.extents
    }

    fn element_type(&self) -> ElementType {
        self.element
    }

    fn get(&self, position: &[i64]) -> Result<f64, RasterError> {
        let offset = self.offset(position)?;
        Ok(self.data[offset])
    }
}

impl RasterMut for DenseRaster {
    fn set(&mut self, position: &[i64], value: f64) -> Result<(), RasterError> {
        let offset = self.offset(position)?;
        self.data[offset] = self.element.quantize(value);
        Ok(())
    }
}

/// Builder for [`DenseRaster`].
///
/// Axes are appended in storage order. Defaults: `U8` elements, filled
/// with `0`.
#[derive(Clone, Debug)]
pub struct DenseRasterBuilder {
    layout: Vec<(AxisType, u64)>,
    element: ElementType,
    fill: f64,
}

impl DenseRasterBuilder {
    /// Append an axis.
    pub fn axis(mut self, axis: AxisType, extent: u64) -> Self {
        self.layout.push((axis, extent));
        self
    }

    /// Set the element type (default: `U8`).
    pub fn element(mut self, element: ElementType) -> Self {
        self.element = element;
        self
    }

    /// Set the initial value of every sample (default: 0).
    pub fn fill(mut self, value: f64) -> Self {
        self.fill = value;
        self
    }

    /// Build the raster, validating the layout.
    ///
    /// # Errors
    ///
    /// See [`DenseRaster::new`].
    pub fn build(self) -> Result<DenseRaster, RasterError> {
        let mut raster = DenseRaster::new(&self.layout, self.element)?;
        if self.fill != 0.0 {
            raster.fill(self.fill);
        }
        Ok(raster)
    }
}
