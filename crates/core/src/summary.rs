//! Generation history summary.
//!
//! Generated outfits themselves are never persisted; the only durable trace
//! of a generation request is this opaque count/occasion/timestamp record,
//! which the calling layer may log or store as it sees fit.

use serde::Serialize;

use crate::outfit::OutfitCombination;
use crate::types::Timestamp;

/// Opaque summary of one generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub occasion: String,
    pub outfit_count: usize,
    pub generated_at: Timestamp,
}

impl GenerationSummary {
    /// Summarize a finished generation run, stamped with the current time.
    pub fn of(occasion: &str, outfits: &[OutfitCombination]) -> Self {
        Self {
            occasion: occasion.to_string(),
            outfit_count: outfits.len(),
            generated_at: chrono::Utc::now(),
        }
    }
}
