//! Pipeline configuration for scenario runs.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use layered_space_law::{IndicatorCatalog, Pipeline};

use crate::errors::{SpecError, SpecResult};

/// How scenarios are executed.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Classification fan-out.
    pub workers: usize,
    /// Catalog override; `None` uses the built-in catalog.
    pub catalog: Option<Arc<IndicatorCatalog>>,
}

impl PipelineConfig {
    /// Built-in catalog, single worker.
    pub fn standard() -> Self {
        Self {
            workers: 1,
            catalog: None,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Use a catalog read from a RON file.
    pub fn with_catalog_file(mut self, path: &Path) -> SpecResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.catalog = Some(Arc::new(IndicatorCatalog::from_ron_str(&source)?));
        Ok(self)
    }

    /// Build the pipeline this configuration describes.
    pub fn build(&self) -> SpecResult<Pipeline> {
        let pipeline = match &self.catalog {
            Some(catalog) => Pipeline::with_catalog(Arc::clone(catalog))?,
            None => Pipeline::standard(),
        };
        Ok(pipeline.with_workers(self.workers))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
