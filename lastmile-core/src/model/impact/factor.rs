use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the five last-mile service levers, in breakdown display order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    FeederFrequency,
    LastMileWaitTime,
    ServiceAvailability,
    FeederCost,
    IntegrationQuality,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::FeederFrequency,
        Factor::LastMileWaitTime,
        Factor::ServiceAvailability,
        Factor::FeederCost,
        Factor::IntegrationQuality,
    ];

    /// key used in the elasticity table and configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Factor::FeederFrequency => "feeder_frequency",
            Factor::LastMileWaitTime => "last_mile_wait_time",
            Factor::ServiceAvailability => "service_availability",
            Factor::FeederCost => "feeder_cost",
            Factor::IntegrationQuality => "integration_quality",
        }
    }

    /// label for the per-factor impact breakdown.
    pub fn breakdown_label(&self) -> &'static str {
        match self {
            Factor::FeederFrequency => "Frequency Improvement",
            Factor::LastMileWaitTime => "Wait Time Reduction",
            Factor::ServiceAvailability => "Coverage Expansion",
            Factor::FeederCost => "Cost Reduction",
            Factor::IntegrationQuality => "Integration Quality",
        }
    }

    /// short label for the elasticity reference listing.
    pub fn reference_label(&self) -> &'static str {
        match self {
            Factor::FeederFrequency => "Frequency",
            Factor::LastMileWaitTime => "Wait Time",
            Factor::ServiceAvailability => "Coverage",
            Factor::FeederCost => "Cost",
            Factor::IntegrationQuality => "Integration",
        }
    }

    /// literature source for the default coefficient. display only.
    pub fn citation(&self) -> &'static str {
        match self {
            Factor::FeederFrequency => "TCRP Report 95",
            Factor::LastMileWaitTime => "WRI India study",
            Factor::ServiceAvailability => "VTPI",
            Factor::FeederCost => "Standard transit fare elasticity",
            Factor::IntegrationQuality => "Multimodal integration",
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
