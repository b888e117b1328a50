use crate::sizing::domain::{Catalog, ChannelDemand, MatchResult, ResolutionTier};

/// ChannelAggregator - Turns match results into per-tier channel demand
///
/// Each matched result contributes `channel_cost * count` channels to the
/// tier of its camera. Unsupported results contribute nothing.
pub struct ChannelAggregator;

impl ChannelAggregator {
    pub fn aggregate(results: &[MatchResult], catalog: &Catalog) -> ChannelDemand {
        let mut demand = ChannelDemand::default();
        for (tier, channels) in results
            .iter()
            .filter_map(|result| Self::contribution(result, catalog))
        {
            demand.add_channels(tier, channels);
        }
        log::debug!("Channel demand: low={}, high={}", demand.low, demand.high);
        demand
    }

    /// Tier and channel count one result adds to the demand.
    ///
    /// The camera is looked up in `catalog` by name so channel cost and
    /// resolution always come from the reference data.
    pub fn contribution(result: &MatchResult, catalog: &Catalog) -> Option<(ResolutionTier, u64)> {
        let matched = result.matched_camera()?;
        let Some(camera) = catalog.find_camera(matched.model_name()) else {
            log::warn!(
                "Matched camera '{}' is not in the catalog, '{}' adds no channels",
                matched.model_name(),
                result.raw_input()
            );
            return None;
        };
        let channels = u64::from(camera.channel_cost()).saturating_mul(result.count());
        Some((camera.tier(), channels))
    }
}
