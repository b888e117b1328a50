use crate::shared::{Result, SizingError};
use crate::sizing::domain::{GatewayUnit, Recommendation, ResolutionTier, UnitAllocation};

/// Largest covering table the exact search may allocate
pub const MAX_SEARCH_SPAN: u64 = 1 << 21;

/// UnitRecommender - Picks the gateway units that cover a channel demand
///
/// Solved as an unbounded covering problem over the unit ceilings
/// (`high_channels`). Among all multisets whose summed ceiling reaches the
/// demand, the chosen one has the least ceiling excess, then the fewest
/// physical units. Remaining ties resolve towards earlier unit types.
///
/// With `M` the largest ceiling, some optimal multiset holds fewer than `M`
/// units of a smaller ceiling: any `M` of them contain a subset summing to a
/// multiple of `M`, which fewer largest units replace. Demand beyond an
/// `M * M` window is therefore filled with the largest unit up front, and
/// only the remainder goes through an exact table, whose size depends on
/// the catalog and not on the demand.
pub struct UnitRecommender;

impl UnitRecommender {
    /// Recommends units for one resolution tier
    ///
    /// # Arguments
    /// * `tier` - Tier the demand belongs to
    /// * `channels_required` - Channels to cover
    /// * `units` - Available unit types in catalog order
    ///
    /// # Errors
    /// - `NoUnitCoversDemand` when the demand is positive and no unit type is available
    /// - `DemandTooLarge` when the exact table would exceed [`MAX_SEARCH_SPAN`]
    ///   entries or the provisioned ceiling would not fit in a `u64`
    pub fn recommend(
        tier: ResolutionTier,
        channels_required: u64,
        units: &[GatewayUnit],
    ) -> Result<Recommendation> {
        if channels_required == 0 {
            return Ok(Recommendation::empty(tier));
        }

        let no_cover = || -> anyhow::Error {
            SizingError::NoUnitCoversDemand {
                channels: channels_required,
            }
            .into()
        };
        let too_large = |span: u64| -> anyhow::Error {
            SizingError::DemandTooLarge {
                channels: channels_required,
                span,
            }
            .into()
        };

        // First unit type with the largest ceiling
        let (largest_index, largest) = units
            .iter()
            .enumerate()
            .map(|(index, unit)| (index, u64::from(unit.high_channels())))
            .filter(|&(_, ceiling)| ceiling > 0)
            .fold(None, |best: Option<(usize, u64)>, (index, ceiling)| match best {
                Some((_, top)) if top >= ceiling => best,
                _ => Some((index, ceiling)),
            })
            .ok_or_else(no_cover)?;

        let window = largest.saturating_mul(largest);
        let bulk = channels_required.saturating_sub(window) / largest;
        let remainder = channels_required - bulk * largest;

        // Using a single unit type reaches some sum at or above the remainder,
        // so the smallest such sum bounds the search.
        let limit = units
            .iter()
            .map(|unit| u64::from(unit.high_channels()))
            .filter(|&ceiling| ceiling > 0)
            .map(|ceiling| remainder.div_ceil(ceiling).saturating_mul(ceiling))
            .min()
            .ok_or_else(no_cover)?;
        if limit > MAX_SEARCH_SPAN {
            return Err(too_large(limit));
        }
        let (required, limit) = match (usize::try_from(remainder), usize::try_from(limit)) {
            (Ok(required), Ok(limit)) => (required, limit),
            _ => return Err(too_large(limit)),
        };

        // fewest[s]: fewest units whose ceilings sum to exactly s
        // last_unit[s]: the unit type added last on that path
        let mut fewest: Vec<Option<u32>> = vec![None; limit + 1];
        let mut last_unit: Vec<usize> = vec![0; limit + 1];
        fewest[0] = Some(0);

        for sum in 1..=limit {
            for (index, unit) in units.iter().enumerate() {
                let ceiling = unit.high_channels() as usize;
                if ceiling == 0 || ceiling > sum {
                    continue;
                }
                if let Some(previous) = fewest[sum - ceiling] {
                    if fewest[sum].is_none_or(|current| previous + 1 < current) {
                        fewest[sum] = Some(previous + 1);
                        last_unit[sum] = index;
                    }
                }
            }
        }

        let covered_remainder = (required..=limit)
            .find(|&sum| fewest[sum].is_some())
            .ok_or_else(no_cover)?;

        let mut counts = vec![0u64; units.len()];
        counts[largest_index] = bulk;
        let mut sum = covered_remainder;
        while sum > 0 {
            let index = last_unit[sum];
            counts[index] += 1;
            sum -= units[index].high_channels() as usize;
        }

        let covered = (bulk * largest)
            .checked_add(covered_remainder as u64)
            .ok_or_else(|| too_large(limit as u64))?;

        let allocations: Vec<UnitAllocation> = units
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(unit, count)| UnitAllocation::new(unit.clone(), count))
            .collect();

        let excess = Self::calculate_excess(channels_required, &allocations);
        let ceiling_excess = covered - channels_required;

        log::info!(
            "{} tier: {} channels -> {} unit(s), {} of them bulk {}, ceiling excess {}, low-bound excess {}",
            tier,
            channels_required,
            bulk + u64::from(fewest[covered_remainder].unwrap_or(0)),
            bulk,
            units[largest_index].name(),
            ceiling_excess,
            excess
        );

        Ok(Recommendation::new(
            tier,
            channels_required,
            allocations,
            excess,
            ceiling_excess,
        ))
    }

    /// Worst-case spare capacity: the units' summed low bound minus the demand.
    ///
    /// This can be negative even when the ceilings cover the demand and is
    /// reported as-is, clamped to the `i64` range.
    pub fn calculate_excess(channels_required: u64, allocations: &[UnitAllocation]) -> i64 {
        let floor = allocations
            .iter()
            .fold(0u64, |total, a| total.saturating_add(a.floor_channels()));
        let excess = i128::from(floor) - i128::from(channels_required);
        i64::try_from(excess).unwrap_or(if excess < 0 { i64::MIN } else { i64::MAX })
    }
}
