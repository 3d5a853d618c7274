//! Payload describing an export or save request for a finished result.
//!
//! The demo has no export backend. The client logs this payload so the
//! request is visible, and the same shape is what a backend would accept.

use serde::Serialize;

use crate::catalog::ExportFormat;
use crate::feature::FeatureId;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Where an export is headed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    /// Local file download in the chosen format.
    Download,
    /// Saved back into the current Confluence page.
    Confluence,
}

#[derive(Debug, Serialize)]
pub struct ExportRequest<'a, R: Serialize> {
    pub feature: FeatureId,
    pub target: ExportTarget,
    pub format: ExportFormat,
    pub result: &'a R,
}

impl<R: Serialize> ExportRequest<'_, R> {
    /// Render the request as a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures; the result types here never fail.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
