use std::fs;
use std::path::Path;

use pixel_ops::{sharpen, to_grayscale, Histogram, ImageBuffer};

use crate::codec;
use crate::error::{Artifact, PipelineError, Stage};
use crate::models::{OutputPaths, PipelineReport};

/// Fixed processing pipeline: decode → sharpen → write image → grayscale →
/// histogram → write histogram.
///
/// Stages run strictly in order on a single buffer. The image artifact is
/// the *sharpened* raster; grayscale conversion then mutates that same
/// buffer in place and the histogram is taken from the result. Any failure
/// aborts the run; nothing is retried or skipped.
pub struct Pipeline {
    outputs: OutputPaths,
}

impl Pipeline {
    pub fn new(outputs: OutputPaths) -> Self {
        Self { outputs }
    }

    /// Where artifacts are written
    pub fn outputs(&self) -> &OutputPaths {
        &self.outputs
    }

    /// Run every stage on the raster at `input`.
    pub fn run(&self, input: &Path) -> Result<PipelineReport, PipelineError> {
        tracing::info!(input = %input.display(), "Starting pipeline");

        let result = self.execute(input);

        match &result {
            Ok(report) => tracing::info!(
                width = report.width,
                height = report.height,
                histogram = %report.histogram,
                "Pipeline finished"
            ),
            Err(e) => tracing::error!(
                stage = %e.stage(),
                kind = %e.kind(),
                error = %e,
                "Pipeline aborted"
            ),
        }

        result
    }

    fn execute(&self, input: &Path) -> Result<PipelineReport, PipelineError> {
        // The decoded input is only needed as the sharpening source.
        let mut image = {
            let decoded = self.decode(input)?;
            let sharpened = sharpen(&decoded).map_err(PipelineError::Sharpen)?;
            tracing::debug!(stage = %Stage::Sharpen, "Sharpened interior pixels");
            sharpened
        };

        codec::ppm::write_file(&self.outputs.image, &image).map_err(|source| {
            PipelineError::Write {
                artifact: Artifact::Image,
                path: self.outputs.image.clone(),
                source,
            }
        })?;
        tracing::debug!(
            stage = %Stage::WriteImage,
            path = %self.outputs.image.display(),
            "Wrote sharpened image"
        );

        to_grayscale(&mut image);
        tracing::debug!(stage = %Stage::Grayscale, "Converted to BT.709 luma");

        let histogram = Histogram::from_grayscale(&image);
        tracing::debug!(stage = %Stage::Histogram, counts = %histogram, "Built histogram");

        codec::histogram::write_file(&self.outputs.histogram, &histogram).map_err(|source| {
            PipelineError::Write {
                artifact: Artifact::Histogram,
                path: self.outputs.histogram.clone(),
                source,
            }
        })?;
        tracing::debug!(
            stage = %Stage::WriteHistogram,
            path = %self.outputs.histogram.display(),
            "Wrote histogram"
        );

        Ok(PipelineReport {
            width: image.width(),
            height: image.height(),
            histogram,
            image_path: self.outputs.image.clone(),
            histogram_path: self.outputs.histogram.clone(),
        })
    }

    fn decode(&self, input: &Path) -> Result<ImageBuffer, PipelineError> {
        let data = fs::read(input).map_err(|source| PipelineError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::debug!(stage = %Stage::ReadInput, bytes = data.len(), "Read input");

        let image = codec::decode(&data).map_err(|source| PipelineError::Decode {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            stage = %Stage::Decode,
            width = image.width(),
            height = image.height(),
            "Decoded raster"
        );

        Ok(image)
    }
}
