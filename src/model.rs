//! The array being sorted and its derived layout metrics
//!
//! [`SortArray`] owns the value buffer for one sorting run. During a sort the
//! active stepper is the only writer (it borrows the buffer mutably for each
//! resumption); the renderer only ever reads between resumptions. The
//! [`Layout`] snapshot is recomputed whenever the array is (re)initialized and
//! is never mutated independently of it.

use crate::config::Config;
use rand::Rng;
use std::fmt;

/// Derived, read-only layout metrics for the bar chart.
///
/// `span` is guaranteed non-zero, so height scaling never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub min_value: u32,
    pub max_value: u32,
    pub span: u32,
}

impl Layout {
    fn from_range(min_value: u32, max_value: u32) -> Result<Self, ModelError> {
        if max_value <= min_value {
            return Err(ModelError::DegenerateRange {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Layout {
            min_value,
            max_value,
            span: max_value - min_value,
        })
    }

    fn from_values(values: &[u32]) -> Result<Self, ModelError> {
        if values.is_empty() {
            return Err(ModelError::Empty);
        }
        let min = *values.iter().min().unwrap_or(&0);
        let max = *values.iter().max().unwrap_or(&0);
        Layout::from_range(min, max)
    }

    /// Bar height in cells for `value`, scaled into `height` total cells.
    /// Every bar gets at least one cell so the smallest value stays visible.
    pub fn bar_height(&self, value: u32, height: u16) -> u16 {
        let unit = value.saturating_sub(self.min_value) as u64;
        let scaled = unit * height as u64 / self.span as u64;
        (scaled as u16).clamp(1, height)
    }
}

/// The mutable value sequence for one sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArray {
    values: Vec<u32>,
    layout: Layout,
}

impl SortArray {
    /// Generate a uniformly random array from the configured length and
    /// value range. The layout span comes from the config range, which
    /// validation guarantees to be non-degenerate.
    pub fn random(config: &Config) -> Result<Self, ModelError> {
        if config.array_len == 0 {
            return Err(ModelError::Empty);
        }
        let layout = Layout::from_range(config.min_value, config.max_value)?;
        let mut rng = rand::thread_rng();
        let values = (0..config.array_len)
            .map(|_| rng.gen_range(config.min_value..=config.max_value))
            .collect();
        Ok(SortArray { values, layout })
    }

    /// Build an array from externally supplied values. Layout metrics come
    /// from the observed extremes; all-equal input is rejected because it
    /// would zero the height scale.
    pub fn from_values(values: Vec<u32>) -> Result<Self, ModelError> {
        let layout = Layout::from_values(&values)?;
        Ok(SortArray { values, layout })
    }

    /// Install a replacement value sequence and recompute layout metrics.
    pub fn replace(&mut self, values: Vec<u32>) -> Result<(), ModelError> {
        self.layout = Layout::from_values(&values)?;
        self.values = values;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Mutable view for the active stepper. Exactly one writer at a time by
    /// construction: the driver resumes the stepper, then the renderer reads.
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}

/// Errors from array construction or replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Zero-length array
    Empty,

    /// Value span of zero (all values equal, or inverted bounds)
    DegenerateRange { min: u32, max: u32 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Empty => write!(f, "Array must contain at least one value"),
            ModelError::DegenerateRange { min, max } => {
                write!(
                    f,
                    "Value range [{}, {}] gives the bar chart a zero height scale",
                    min, max
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_respects_bounds() {
        let config = Config::default();
        let array = SortArray::random(&config).expect("generation failed");
        assert_eq!(array.len(), config.array_len);
        assert!(array
            .values()
            .iter()
            .all(|&v| (config.min_value..=config.max_value).contains(&v)));
    }

    #[test]
    fn test_layout_from_config_range() {
        let config = Config::default();
        let array = SortArray::random(&config).expect("generation failed");
        assert_eq!(array.layout().span, config.max_value - config.min_value);
    }

    #[test]
    fn test_from_values_observes_extremes() {
        let array = SortArray::from_values(vec![7, 3, 9, 5]).expect("construction failed");
        let layout = array.layout();
        assert_eq!(layout.min_value, 3);
        assert_eq!(layout.max_value, 9);
        assert_eq!(layout.span, 6);
    }

    #[test]
    fn test_all_equal_values_rejected() {
        assert_eq!(
            SortArray::from_values(vec![4, 4, 4]),
            Err(ModelError::DegenerateRange { min: 4, max: 4 })
        );
    }

    #[test]
    fn test_empty_values_rejected() {
        assert_eq!(SortArray::from_values(vec![]), Err(ModelError::Empty));
    }

    #[test]
    fn test_replace_recomputes_layout() {
        let mut array = SortArray::from_values(vec![1, 2]).expect("construction failed");
        array.replace(vec![10, 20, 30]).expect("replace failed");
        assert_eq!(array.len(), 3);
        assert_eq!(array.layout().span, 20);
    }

    #[test]
    fn test_bar_height_never_zero() {
        let layout = Layout::from_range(0, 100).expect("layout failed");
        assert_eq!(layout.bar_height(0, 40), 1);
        assert_eq!(layout.bar_height(100, 40), 40);
    }
}
