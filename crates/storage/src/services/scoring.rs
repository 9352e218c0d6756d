use rust_decimal::Decimal;
use uuid::Uuid;

/// The four judged criteria. Weights are fixed business constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criteria {
    pub innovation: Decimal,
    pub technical: Decimal,
    pub presentation: Decimal,
    pub design: Decimal,
}

const WEIGHT_INNOVATION: Decimal = Decimal::from_parts(4, 0, 0, false, 1);
const WEIGHT_TECHNICAL: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const WEIGHT_PRESENTATION: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const WEIGHT_DESIGN: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Weighted total: 0.4*innovation + 0.3*technical + 0.2*presentation + 0.1*design.
pub fn weighted_total(criteria: &Criteria) -> Decimal {
    criteria.innovation * WEIGHT_INNOVATION
        + criteria.technical * WEIGHT_TECHNICAL
        + criteria.presentation * WEIGHT_PRESENTATION
        + criteria.design * WEIGHT_DESIGN
}

/// Dense ranking over values already sorted descending. Tied values
/// share a rank and each distinct value advances the rank by one, so
/// [90, 90, 80] ranks as [1, 1, 2].
pub fn dense_ranks(sorted_desc: &[Decimal]) -> Vec<i64> {
    let mut rank = 0i64;
    sorted_desc
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i == 0 || *value < sorted_desc[i - 1] {
                rank += 1;
            }
            rank
        })
        .collect()
}

/// One participant's summed total within the finalization ranking pool.
#[derive(Debug, Clone)]
pub struct RankedTotal {
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct PodiumPrize {
    pub points: i32,
    pub label: &'static str,
}

pub const PODIUM_PRIZES: [PodiumPrize; 3] = [
    PodiumPrize {
        points: 100,
        label: "Gold 🥇",
    },
    PodiumPrize {
        points: 70,
        label: "Silver 🥈",
    },
    PodiumPrize {
        points: 50,
        label: "Bronze 🥉",
    },
];

#[derive(Debug, Clone)]
pub struct PodiumAward {
    pub position: i32,
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub points: i32,
    pub prize: &'static str,
}

/// Assigns podium prizes to the top entries of a ranking pool sorted
/// descending by total. Takes at most three awards, fewer if fewer
/// participants were scored.
pub fn podium(standings: &[RankedTotal]) -> Vec<PodiumAward> {
    standings
        .iter()
        .zip(PODIUM_PRIZES.iter())
        .enumerate()
        .map(|(i, (entry, prize))| PodiumAward {
            position: i as i32 + 1,
            registration_id: entry.registration_id,
            user_id: entry.user_id,
            points: prize.points,
            prize: prize.label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(innovation: u32, technical: u32, presentation: u32, design: u32) -> Criteria {
        Criteria {
            innovation: Decimal::from(innovation),
            technical: Decimal::from(technical),
            presentation: Decimal::from(presentation),
            design: Decimal::from(design),
        }
    }

    #[test]
    fn test_weighted_total_is_exact() {
        let total = weighted_total(&criteria(10, 10, 10, 10));
        assert_eq!(total, Decimal::from(10));

        let total = weighted_total(&criteria(8, 6, 4, 2));
        // 3.2 + 1.8 + 0.8 + 0.2
        assert_eq!(total, Decimal::new(60, 1));
    }

    #[test]
    fn test_weighted_total_zero() {
        assert_eq!(weighted_total(&criteria(0, 0, 0, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_dense_ranks_shares_rank_on_tie() {
        let values = vec![Decimal::from(90), Decimal::from(90), Decimal::from(80)];
        assert_eq!(dense_ranks(&values), vec![1, 1, 2]);
    }

    #[test]
    fn test_dense_ranks_advances_by_one_after_long_tie() {
        let values = vec![
            Decimal::from(95),
            Decimal::from(95),
            Decimal::from(95),
            Decimal::from(90),
        ];
        assert_eq!(dense_ranks(&values), vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_dense_ranks_all_distinct() {
        let values = vec![Decimal::from(3), Decimal::from(2), Decimal::from(1)];
        assert_eq!(dense_ranks(&values), vec![1, 2, 3]);
    }

    #[test]
    fn test_dense_ranks_empty() {
        assert!(dense_ranks(&[]).is_empty());
    }

    #[test]
    fn test_podium_assigns_three_prizes() {
        let standings: Vec<RankedTotal> = [190, 180, 145, 100]
            .iter()
            .map(|total| RankedTotal {
                registration_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                total: Decimal::from(*total as u32),
            })
            .collect();

        let awards = podium(&standings);
        assert_eq!(awards.len(), 3);
        assert_eq!(awards[0].position, 1);
        assert_eq!(awards[0].points, 100);
        assert_eq!(awards[0].prize, "Gold 🥇");
        assert_eq!(awards[1].points, 70);
        assert_eq!(awards[1].prize, "Silver 🥈");
        assert_eq!(awards[2].points, 50);
        assert_eq!(awards[2].prize, "Bronze 🥉");
    }

    #[test]
    fn test_podium_with_fewer_than_three_participants() {
        let standings = vec![RankedTotal {
            registration_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            total: Decimal::from(50),
        }];

        let awards = podium(&standings);
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].prize, "Gold 🥇");
    }

    // Worked scenario: judge totals R1={88,92}, R2={95,95}, R3={70,75}
    // sum to R2=190 > R1=180 > R3=145.
    #[test]
    fn test_podium_worked_scenario() {
        let r1 = Uuid::new_v4();
        let r2 = Uuid::new_v4();
        let r3 = Uuid::new_v4();

        let mut standings = vec![
            RankedTotal {
                registration_id: r1,
                user_id: Uuid::new_v4(),
                total: Decimal::from(88) + Decimal::from(92),
            },
            RankedTotal {
                registration_id: r2,
                user_id: Uuid::new_v4(),
                total: Decimal::from(95) + Decimal::from(95),
            },
            RankedTotal {
                registration_id: r3,
                user_id: Uuid::new_v4(),
                total: Decimal::from(70) + Decimal::from(75),
            },
        ];
        standings.sort_by(|a, b| b.total.cmp(&a.total));

        let awards = podium(&standings);
        assert_eq!(awards[0].registration_id, r2);
        assert_eq!(awards[0].points, 100);
        assert_eq!(awards[1].registration_id, r1);
        assert_eq!(awards[1].points, 70);
        assert_eq!(awards[2].registration_id, r3);
        assert_eq!(awards[2].points, 50);
    }
}
