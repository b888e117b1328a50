use super::catalog::ResolutionTier;
use serde::Serialize;
use std::ops::Add;

/// Required gateway channels per resolution tier.
///
/// Sums saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChannelDemand {
    pub low: u64,
    pub high: u64,
}

impl ChannelDemand {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn get(&self, tier: ResolutionTier) -> u64 {
        match tier {
            ResolutionTier::Low => self.low,
            ResolutionTier::High => self.high,
        }
    }

    pub fn add_channels(&mut self, tier: ResolutionTier, channels: u64) {
        match tier {
            ResolutionTier::Low => self.low = self.low.saturating_add(channels),
            ResolutionTier::High => self.high = self.high.saturating_add(channels),
        }
    }

    pub fn total(&self) -> u64 {
        self.low.saturating_add(self.high)
    }
}

impl Add for ChannelDemand {
    type Output = ChannelDemand;

    fn add(self, other: ChannelDemand) -> ChannelDemand {
        ChannelDemand::new(
            self.low.saturating_add(other.low),
            self.high.saturating_add(other.high),
        )
    }
}
