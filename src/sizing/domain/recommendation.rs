use super::catalog::{GatewayUnit, ResolutionTier};
use serde::Serialize;

/// A gateway unit type and how many of it to deploy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitAllocation {
    pub unit: GatewayUnit,
    pub count: u64,
}

impl UnitAllocation {
    pub fn new(unit: GatewayUnit, count: u64) -> Self {
        Self { unit, count }
    }

    pub fn ceiling_channels(&self) -> u64 {
        u64::from(self.unit.high_channels()).saturating_mul(self.count)
    }

    pub fn floor_channels(&self) -> u64 {
        u64::from(self.unit.low_channels()).saturating_mul(self.count)
    }
}

/// Gateway units provisioned for one resolution tier.
///
/// `excess_channels` is the conservative spare capacity computed from the
/// units' low bound and may be negative even though the ceiling covers the
/// demand. `ceiling_excess` is the spare capacity the selection minimised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    tier: ResolutionTier,
    required_channels: u64,
    allocations: Vec<UnitAllocation>,
    excess_channels: i64,
    ceiling_excess: u64,
}

impl Recommendation {
    pub fn new(
        tier: ResolutionTier,
        required_channels: u64,
        allocations: Vec<UnitAllocation>,
        excess_channels: i64,
        ceiling_excess: u64,
    ) -> Self {
        Self {
            tier,
            required_channels,
            allocations,
            excess_channels,
            ceiling_excess,
        }
    }

    pub fn empty(tier: ResolutionTier) -> Self {
        Self::new(tier, 0, Vec::new(), 0, 0)
    }

    pub fn tier(&self) -> ResolutionTier {
        self.tier
    }

    pub fn required_channels(&self) -> u64 {
        self.required_channels
    }

    pub fn allocations(&self) -> &[UnitAllocation] {
        &self.allocations
    }

    pub fn excess_channels(&self) -> i64 {
        self.excess_channels
    }

    pub fn ceiling_excess(&self) -> u64 {
        self.ceiling_excess
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn unit_count(&self) -> u64 {
        self.allocations.iter().fold(0u64, |total, a| total.saturating_add(a.count))
    }

    pub fn provisioned_ceiling(&self) -> u64 {
        self.allocations
            .iter()
            .fold(0u64, |total, a| total.saturating_add(a.ceiling_channels()))
    }

    pub fn provisioned_storage_tb(&self) -> f64 {
        self.allocations
            .iter()
            .map(|a| a.unit.storage_tb() * a.count as f64)
            .sum()
    }

    /// Unit names with repetition, one entry per physical unit.
    ///
    /// Expands every unit; use `allocations` for large fleets.
    pub fn unit_names(&self) -> Vec<&str> {
        self.allocations
            .iter()
            .flat_map(|a| std::iter::repeat(a.unit.name()).take(a.count as usize))
            .collect()
    }
}
