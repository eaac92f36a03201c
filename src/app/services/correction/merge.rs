//! Keyed merge of sampling results back into log records

use std::collections::HashMap;

use crate::app::models::{LogRecord, SampledPoint};
use crate::{Error, Result};

/// Merge sampled points into `records` by id, in place
///
/// Every record must find exactly one sampled counterpart; anything else is
/// a contract violation with the sampling backend and fails the file with
/// [`Error::MergeKeyMismatch`]. Record order is never touched.
pub fn merge_samples(
    records: &mut [LogRecord],
    samples: &[SampledPoint],
    file: &str,
) -> Result<()> {
    if samples.len() != records.len() {
        return Err(Error::merge_key_mismatch(
            file,
            format!(
                "sampling returned {} results for {} input points",
                samples.len(),
                records.len()
            ),
        ));
    }

    let mut by_id: HashMap<&str, &SampledPoint> = HashMap::with_capacity(samples.len());
    for sample in samples {
        if by_id.insert(sample.id.as_str(), sample).is_some() {
            return Err(Error::merge_key_mismatch(
                file,
                format!("sampling returned duplicate results for id '{}'", sample.id),
            ));
        }
    }

    for record in records.iter_mut() {
        let sample = by_id.get(record.id.as_str()).copied().ok_or_else(|| {
            Error::merge_key_mismatch(
                file,
                format!("no sampled point for record id '{}'", record.id),
            )
        })?;
        record.apply_sample(sample);
    }

    Ok(())
}
