use super::column_sanitizer::ValueScrubber;
use super::similarity::CandidateSet;
use crate::sizing::domain::{Catalog, CatalogCamera, Cell, InventoryRow, MatchResult, MatchTier};
use crate::sizing::policies::{MatchPolicy, SimilarityScores};
use std::collections::HashMap;

/// Tier and catalog camera assigned to one inventory value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    pub tier: MatchTier,
    pub camera: Option<&'a CatalogCamera>,
}

impl Classification<'_> {
    fn unsupported() -> Self {
        Self {
            tier: MatchTier::Unsupported,
            camera: None,
        }
    }
}

/// FuzzyMatcher - Classifies inventory values against the catalog
///
/// Runs the plain, token-sort and token-set scorers over every catalog
/// model name and hands the three best matches to the [`MatchPolicy`].
/// Values are scrubbed of address and numbering noise before scoring.
pub struct FuzzyMatcher<'a> {
    catalog: &'a Catalog,
    candidates: CandidateSet,
    scrubber: ValueScrubber,
    policy: MatchPolicy,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(catalog: &'a Catalog, policy: MatchPolicy) -> Self {
        Self {
            catalog,
            candidates: CandidateSet::from_catalog(catalog),
            scrubber: ValueScrubber::from_catalog(catalog),
            policy,
        }
    }

    /// Best match per scorer, `None` for an empty catalog
    pub fn scores(&self, value: &str) -> Option<SimilarityScores> {
        self.candidates.scores(value)
    }

    /// Classifies a single cell.
    ///
    /// Blank and numeric cells are always unsupported.
    pub fn classify(&self, cell: &Cell) -> Classification<'a> {
        let Some(text) = cell.as_text() else {
            return Classification::unsupported();
        };
        let Some(scores) = self.scores(&self.scrubber.scrub(text)) else {
            return Classification::unsupported();
        };

        let (tier, index) = self.policy.classify(&scores);
        match index.and_then(|i| self.catalog.cameras().get(i)) {
            Some(camera) => Classification {
                tier,
                camera: Some(camera),
            },
            None => Classification::unsupported(),
        }
    }

    /// Classifies every distinct model value of the inventory
    ///
    /// Rows with the same raw value are folded into one result whose count
    /// is the saturating sum of their quantities. Blank model cells are skipped.
    ///
    /// # Returns
    /// Results ordered by tier, then by first appearance in `rows`
    pub fn match_rows(&self, rows: &[InventoryRow]) -> Vec<MatchResult> {
        let mut distinct: Vec<(&Cell, u64)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let model = row.model();
            if model.is_blank() {
                continue;
            }
            let key = model.to_string();
            match positions.get(&key) {
                Some(&position) => {
                    let count = &mut distinct[position].1;
                    *count = count.saturating_add(row.quantity());
                }
                None => {
                    positions.insert(key, distinct.len());
                    distinct.push((model, row.quantity()));
                }
            }
        }

        let mut results: Vec<MatchResult> = distinct
            .into_iter()
            .map(|(model, count)| {
                let raw_input = model.to_string();
                let classification = self.classify(model);
                log::debug!(
                    "'{}' x{} -> {} ({})",
                    raw_input,
                    count,
                    classification.tier,
                    classification.camera.map_or("-", CatalogCamera::model_name)
                );
                match classification.camera {
                    Some(camera) => {
                        MatchResult::matched(raw_input, classification.tier, camera.clone(), count)
                    }
                    None => MatchResult::unsupported(raw_input, count),
                }
            })
            .collect();

        // sort_by_key is stable, first appearance survives within a tier
        results.sort_by_key(MatchResult::tier);
        results
    }
}
