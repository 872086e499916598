use std::path::Path;

use crate::{Error, Result};
use crate::constants::DEFAULT_TARGET;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// Every column except the target column is a binary feature.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use miniid3::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("Class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            target: None,
        }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// Each item of the column takes value in `{0, 1}.`
    /// Default is `"Class"`.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments
    /// and returns `miniid3::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or(Error::MissingFile)?;
        let target = self.target.as_ref()
            .map(|t| t.as_ref())
            .unwrap_or(DEFAULT_TARGET);

        Sample::from_csv(file, self.has_header, target)
    }
}
