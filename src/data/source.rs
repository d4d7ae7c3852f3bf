use crate::data::Sample;
use crate::error::Result;

/// Iterator over the samples of one pass through a source.
pub type SampleIter<'a> = Box<dyn Iterator<Item = Result<Sample>> + 'a>;

/// A restartable, finite sequence of samples.
///
/// Every call to `samples` starts again from the beginning and must yield the
/// same sequence, so repeated epochs see identical data in identical order.
pub trait SampleSource {
    fn samples(&self) -> Result<SampleIter<'_>>;
}

impl SampleSource for [Sample] {
    fn samples(&self) -> Result<SampleIter<'_>> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl SampleSource for Vec<Sample> {
    fn samples(&self) -> Result<SampleIter<'_>> {
        self.as_slice().samples()
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &S {
    fn samples(&self) -> Result<SampleIter<'_>> {
        (**self).samples()
    }
}
