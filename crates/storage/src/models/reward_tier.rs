/// A named reward band over accumulated points. The table is ordered and
/// covers [0, ∞) with no gaps; the top tier is unbounded.
#[derive(Debug, Clone)]
pub struct RewardTier {
    pub name: &'static str,
    pub min_points: i32,
    pub max_points: Option<i32>,
    pub perks: &'static [&'static str],
}

pub const REWARD_TIERS: [RewardTier; 4] = [
    RewardTier {
        name: "BRONZE",
        min_points: 0,
        max_points: Some(40),
        perks: &["Certificate of Participation", "Community Badge"],
    },
    RewardTier {
        name: "SILVER",
        min_points: 41,
        max_points: Some(70),
        perks: &["Swag Pack", "Priority Event Access", "LinkedIn Shoutout"],
    },
    RewardTier {
        name: "GOLD",
        min_points: 71,
        max_points: Some(85),
        perks: &[
            "Internship Eligibility",
            "Letter of Recommendation",
            "Paid Workshop Access",
        ],
    },
    RewardTier {
        name: "PLATINUM",
        min_points: 86,
        max_points: None,
        perks: &[
            "National Leadership Role",
            "Stipend / Revenue Share",
            "CSR Project Ownership",
        ],
    },
];

/// Maps accumulated points to a tier name. Unmatched input (negative
/// points) falls back to the lowest tier.
pub fn tier_for_points(points: i32) -> &'static str {
    REWARD_TIERS
        .iter()
        .find(|tier| {
            points >= tier.min_points && tier.max_points.is_none_or(|max| points <= max)
        })
        .map(|tier| tier.name)
        .unwrap_or(REWARD_TIERS[0].name)
}

/// Full tier definition for a given name, used by the rewards view.
pub fn tier_by_name(name: &str) -> &'static RewardTier {
    REWARD_TIERS
        .iter()
        .find(|tier| tier.name == name)
        .unwrap_or(&REWARD_TIERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for_points(0), "BRONZE");
        assert_eq!(tier_for_points(40), "BRONZE");
        assert_eq!(tier_for_points(41), "SILVER");
        assert_eq!(tier_for_points(70), "SILVER");
        assert_eq!(tier_for_points(71), "GOLD");
        assert_eq!(tier_for_points(85), "GOLD");
        assert_eq!(tier_for_points(86), "PLATINUM");
    }

    #[test]
    fn test_top_tier_is_unbounded() {
        assert_eq!(tier_for_points(100), "PLATINUM");
        assert_eq!(tier_for_points(10_000), "PLATINUM");
    }

    #[test]
    fn test_negative_points_fall_back_to_lowest_tier() {
        assert_eq!(tier_for_points(-5), "BRONZE");
    }

    #[test]
    fn test_table_has_no_gaps() {
        for pair in REWARD_TIERS.windows(2) {
            assert_eq!(pair[0].max_points.unwrap() + 1, pair[1].min_points);
        }
    }

    #[test]
    fn test_tier_by_name_falls_back_for_unknown() {
        assert_eq!(tier_by_name("DIAMOND").name, "BRONZE");
        assert_eq!(tier_by_name("GOLD").name, "GOLD");
    }
}
