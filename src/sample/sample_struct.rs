use std::path::Path;
use std::ops::Index;
use std::collections::HashMap;

use polars::prelude::*;
use rayon::prelude::*;

use crate::{Error, Result};
use super::data_point::*;


/// Struct `Sample` holds a batch of [`DataPoint`]s.
/// The points are append-only and addressed by their position;
/// trees refer to them through these positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) feature_names: Vec<String>,
    pub(super) points: Vec<DataPoint>,
}


impl Sample {
    /// Construct an empty sample over the given feature names.
    /// The order of `feature_names` is the declaration order
    /// that breaks ties when growing a tree.
    pub fn new<I, S>(feature_names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let feature_names = feature_names.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        Self { feature_names, points: Vec::new(), }
    }


    /// Append a point to this sample.
    /// The point must have exactly the features of this sample.
    pub fn push(&mut self, point: DataPoint) -> Result<()> {
        let map = point.feature_map();
        let same = map.len() == self.feature_names.len()
            && self.feature_names.iter().all(|name| map.contains_key(name));

        if !same {
            let mut found = map.keys().cloned().collect::<Vec<_>>();
            found.sort();
            return Err(Error::FeatureMismatch {
                expected: self.feature_names.clone(),
                found,
            });
        }
        self.points.push(point);
        Ok(())
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Every cell must be an integer in `{0, 1}`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self>
    {
        let n_sample = data.height();
        if target.len() != n_sample {
            return Err(Error::InvalidArgument(format!(
                "target has {} rows but the data has {n_sample} rows",
                target.len()
            )));
        }

        let target = binary_column(&target)?;

        let columns = data.get_columns()
            .par_iter()
            .map(|series| {
                let name = series.name().to_string();
                binary_column(series).map(|values| (name, values))
            })
            .collect::<Result<Vec<_>>>()?;

        let feature_names = columns.iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>();

        let points = target.into_iter()
            .enumerate()
            .map(|(row, class_name)| {
                let feature_map = columns.iter()
                    .map(|(name, values)| (name.clone(), values[row]))
                    .collect::<HashMap<_, _>>();
                DataPoint::new(feature_map, class_name)
            })
            .collect::<Vec<_>>();

        Ok(Self { feature_names, points })
    }


    /// Read a CSV format file to `Sample` type.
    /// The column named `target` becomes the class label.
    pub fn from_csv<P>(file: P, has_header: bool, target: &str)
        -> Result<Self>
        where P: AsRef<Path>,
    {
        let mut data = CsvReader::from_path(file.as_ref())?
            .has_header(has_header)
            .finish()?;

        if !data.get_column_names().contains(&target) {
            return Err(Error::MissingTarget(target.to_string()));
        }
        let target = data.drop_in_place(target)?;

        Self::from_dataframe(data, target)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.points.len(), self.feature_names.len())
    }


    /// Returns the number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }


    /// Returns `true` if this sample has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }


    /// Returns the feature names in declaration order.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Returns a slice of [`DataPoint`].
    #[inline]
    pub fn points(&self) -> &[DataPoint] {
        &self.points[..]
    }


    /// Returns the class label of the `row`-th example.
    #[inline]
    pub fn class_of(&self, row: usize) -> Binary {
        self.points[row].class_name()
    }


    /// Check that `other` has the same feature names as `self`.
    /// The order of the names does not matter.
    pub fn check_compatible(&self, other: &Sample) -> Result<()> {
        let mut expected = self.feature_names.clone();
        let mut found = other.feature_names.clone();
        expected.sort();
        found.sort();

        if expected != found {
            return Err(Error::FeatureMismatch { expected, found });
        }
        Ok(())
    }
}


impl Index<usize> for Sample {
    type Output = DataPoint;
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.points[row]
    }
}


fn binary_column(series: &Series) -> Result<Vec<Binary>> {
    let name = series.name();
    let values = series.cast(&DataType::Int64)?;

    values.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            Some(value) => Binary::from_cell(value, name, row),
            None => Err(Error::MissingValue {
                column: name.to_string(),
                row,
            }),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn point(a: bool, b: bool, class: bool) -> DataPoint {
        let map = HashMap::from([
            ("A".to_string(), Binary::from(a)),
            ("B".to_string(), Binary::from(b)),
        ]);
        DataPoint::new(map, Binary::from(class))
    }


    #[test]
    fn push_and_index() {
        let mut sample = Sample::new(["A", "B"]);
        sample.push(point(true, false, true)).unwrap();
        sample.push(point(false, false, false)).unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample[0].feature("A"), Binary::One);
        assert_eq!(sample.class_of(1), Binary::Zero);
    }


    #[test]
    fn push_rejects_other_features() {
        let mut sample = Sample::new(["A", "C"]);
        let err = sample.push(point(true, true, true)).unwrap_err();
        assert!(matches!(err, Error::FeatureMismatch { .. }));
        assert!(sample.is_empty());
    }


    #[test]
    fn from_dataframe() {
        let a = Series::new("A", &[0_i64, 1, 1]);
        let b = Series::new("B", &[1_i64, 1, 0]);
        let target = Series::new("Class", &[0_i64, 1, 1]);
        let df = DataFrame::new(vec![a, b]).unwrap();

        let sample = Sample::from_dataframe(df, target).unwrap();
        assert_eq!(sample.feature_names(), &["A".to_string(), "B".to_string()]);
        assert_eq!(sample[2].feature("A"), Binary::One);
        assert_eq!(sample[2].feature("B"), Binary::Zero);
        assert_eq!(sample.class_of(0), Binary::Zero);
    }


    #[test]
    fn from_dataframe_rejects_non_binary() {
        let a = Series::new("A", &[0_i64, 2]);
        let target = Series::new("Class", &[0_i64, 1]);
        let df = DataFrame::new(vec![a]).unwrap();

        let err = Sample::from_dataframe(df, target).unwrap_err();
        assert!(matches!(err, Error::NonBinary { row: 1, .. }));
    }


    #[test]
    fn compatibility() {
        let s1 = Sample::new(["A", "B"]);
        let s2 = Sample::new(["B", "A"]);
        let s3 = Sample::new(["A"]);
        assert!(s1.check_compatible(&s2).is_ok());
        assert!(s1.check_compatible(&s3).is_err());
    }
}
