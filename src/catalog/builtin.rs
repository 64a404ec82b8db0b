// Built-in garment production catalog and session quotes

use super::Catalog;
use crate::models::{Phase, PhaseInfo, Task};

fn info(mockup_level: &str, timeline: &str, caution: &str, icon: &str) -> PhaseInfo {
    PhaseInfo {
        mockup_level: mockup_level.to_string(),
        timeline: timeline.to_string(),
        caution: caution.to_string(),
        icon: Some(icon.to_string()),
    }
}

fn tasks(items: &[(&str, u32)]) -> Vec<Task> {
    items.iter().map(|(name, days)| Task::new(*name, *days)).collect()
}

impl Catalog {
    /// The default five-phase garment catalog
    pub fn builtin() -> Self {
        let phases = vec![
            Phase::new("Development", tasks(&[
                ("Design Review", 3),
                ("Mockup Creation", 5),
                ("Color Grading", 2),
                ("Fabric Selection", 2),
            ]))
            .with_info(info(
                "Level 2 (Digital + Physical)",
                "2-4 weeks",
                "⚠️ Verify shrinkage specs before production",
                "🎨",
            )),
            Phase::new("Sampling", tasks(&[
                ("Factory Quality Check", 3),
                ("Shrinkage Testing", 2),
                ("Sizing Verification", 3),
                ("Cost Analysis", 1),
            ]))
            .with_info(info(
                "Level 1 (Production Sample)",
                "1-2 weeks",
                "⚠️ Allow +3-5% shrinkage for cotton blends",
                "🧪",
            )),
            Phase::new("Production", tasks(&[
                ("Batch Processing", 14),
                ("Quality Audits", 7),
                ("Inventory Management", 3),
                ("Defect Remediation", 5),
            ]))
            .with_info(info(
                "Level 0 (Mass Production)",
                "3-8 weeks",
                "⚠️ Monitor production yields; target 98% pass rate",
                "🏭",
            )),
            Phase::new("Quality Control", tasks(&[
                ("Final Inspection", 5),
                ("Packaging Verification", 2),
                ("Documentation", 1),
                ("Compliance Check", 2),
            ]))
            .with_info(info(
                "Level 0 (Final)",
                "1 week",
                "⚠️ Zero tolerance for critical defects",
                "✅",
            )),
            Phase::new("Distribution", tasks(&[
                ("Logistics Planning", 2),
                ("Shipping Coordination", 3),
                ("Delivery Tracking", 5),
                ("Customer Feedback", 2),
            ]))
            .with_info(info(
                "N/A",
                "2-3 weeks",
                "⚠️ Confirm delivery schedules with carriers",
                "📦",
            )),
        ];

        // Static data with unique names; validation cannot fail
        Self { phases }
    }
}

/// Quotes shown once per session
pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "Quality is the heartbeat of production. Keep it steady. 💪",
    "Every detail matters—your precision defines your brand. ✨",
    "Speed without quality is just expensive waste. Stay focused! 🎯",
    "Production excellence isn't luck; it's discipline. Keep going! 🚀",
    "Your confidence inspires your team's confidence. Lead by example. 🌟",
];

/// Pick the session quote from a day ordinal
pub fn quote_for_day(ordinal: u32) -> &'static str {
    MOTIVATIONAL_QUOTES[ordinal as usize % MOTIVATIONAL_QUOTES.len()]
}
