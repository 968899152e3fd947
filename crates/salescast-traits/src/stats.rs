//! Statistical utility functions shared by the feature and evaluation stages.

/// Result of filling the gaps of a column with its mean.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanFill {
    /// The column with every gap replaced.
    pub values: Vec<f64>,
    /// Mean of the entries that were defined before filling.
    pub mean: f64,
    /// Number of entries that were filled.
    pub filled: usize,
}

/// Mean of the defined (`Some` and finite) entries of a column.
///
/// Returns `None` when the column has no defined entry.
///
/// # Examples
///
/// ```
/// use salescast_traits::stats::mean_of_defined;
///
/// assert_eq!(mean_of_defined(&[Some(1.0), None, Some(3.0)]), Some(2.0));
/// assert_eq!(mean_of_defined(&[None, None]), None);
/// ```
pub fn mean_of_defined(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Replaces every gap in a column with the mean of its defined entries.
///
/// This is two explicit passes: the mean is computed over the column as
/// given, then substituted. Non-finite entries count as gaps.
///
/// Returns `None` when the column has no defined entry, since there is then
/// no value to fill with.
///
/// # Examples
///
/// ```
/// use salescast_traits::stats::fill_with_mean;
///
/// let fill = fill_with_mean(&[None, Some(2.0), Some(4.0)]).unwrap();
/// assert_eq!(fill.values, vec![3.0, 2.0, 4.0]);
/// assert_eq!(fill.filled, 1);
/// ```
pub fn fill_with_mean(values: &[Option<f64>]) -> Option<MeanFill> {
    let mean = mean_of_defined(values)?;

    let mut filled = 0;
    let values = values
        .iter()
        .map(|v| match v {
            Some(x) if x.is_finite() => *x,
            _ => {
                filled += 1;
                mean
            }
        })
        .collect();

    Some(MeanFill {
        values,
        mean,
        filled,
    })
}

/// Whether every value in the slice is identical.
///
/// An empty slice is considered constant.
pub fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
