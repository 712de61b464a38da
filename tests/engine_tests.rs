use std::collections::HashSet;

use randops::engine::{
    assign_skill, select_squad, selection_weight, Rng, SelectionConfig, SelectionError, SQUAD_SIZE,
};
use randops::roster::Operator;
use serde_json::json;

fn operator(id: u64, name: &str, rarity: u8, elite: u8, level: u32) -> Operator {
    Operator {
        id: json!(id),
        name: name.to_string(),
        elite,
        level,
        rarity,
        own: true,
        potential: 6,
    }
}

fn mixed_roster(size: usize) -> Vec<Operator> {
    (0..size)
        .map(|i| {
            operator(
                i as u64,
                &format!("op-{i}"),
                (i % 6 + 1) as u8,
                (i % 3) as u8,
                (i % 80 + 2) as u32,
            )
        })
        .collect()
}

fn id_set(selection: &[randops::engine::SelectedOperator]) -> HashSet<String> {
    selection
        .iter()
        .map(|s| s.operator.id.to_string())
        .collect()
}

#[test]
fn uniform_selection_returns_twelve_distinct_operators() {
    let roster = mixed_roster(25);
    for seed in 0..32 {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, SelectionConfig::default(), &mut rng)
            .expect("selection should succeed");
        assert_eq!(selection.len(), SQUAD_SIZE);
        assert_eq!(id_set(&selection).len(), SQUAD_SIZE);
    }
}

#[test]
fn weighted_selection_returns_twelve_distinct_operators() {
    let roster = mixed_roster(25);
    let config = SelectionConfig {
        use_level_weighting: true,
        ..Default::default()
    };
    for seed in 0..32 {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, config, &mut rng).expect("selection should succeed");
        assert_eq!(selection.len(), SQUAD_SIZE);
        assert_eq!(id_set(&selection).len(), SQUAD_SIZE);
    }
}

#[test]
fn uniform_selection_matches_fisher_yates_replay() {
    // All-identical stats keep skills fixed and make the final sort a no-op,
    // so the result order is exactly the shuffle order.
    let roster: Vec<Operator> = (0..15)
        .map(|i| operator(i, &format!("op-{i}"), 3, 0, 5))
        .collect();

    let mut rng = Rng::new(42);
    let selection = select_squad(&roster, SelectionConfig::default(), &mut rng)
        .expect("selection should succeed");

    let mut replay = Rng::new(42);
    let mut expected: Vec<usize> = (0..roster.len()).collect();
    for i in (1..expected.len()).rev() {
        let j = replay.next_index(i + 1);
        expected.swap(i, j);
    }

    let got: Vec<String> = selection.iter().map(|s| s.operator.name.clone()).collect();
    let want: Vec<String> = expected
        .iter()
        .take(SQUAD_SIZE)
        .map(|&i| roster[i].name.clone())
        .collect();
    assert_eq!(got, want);
}

#[test]
fn weighted_selection_never_picks_zero_weight_while_positive_remain() {
    // 13 positive-weight operators can satisfy all 12 picks; the zero-weight
    // ones must never appear.
    let mut roster: Vec<Operator> = (0..13)
        .map(|i| operator(i, &format!("raised-{i}"), 6, 2, 60))
        .collect();
    for i in 0..4 {
        roster.push(operator(100 + i, &format!("zero-{i}"), 1, 0, 0));
    }
    for op in &roster[13..] {
        assert_eq!(selection_weight(op), 0);
    }

    let config = SelectionConfig {
        use_level_weighting: true,
        ..Default::default()
    };
    for seed in 0..200 {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, config, &mut rng).expect("selection should succeed");
        assert!(
            selection.iter().all(|s| !s.operator.name.starts_with("zero-")),
            "seed {seed} drew a zero-weight operator with positive weights remaining"
        );
    }
}

#[test]
fn weighted_selection_with_all_zero_weights_degrades_to_uniform() {
    let roster: Vec<Operator> = (0..15)
        .map(|i| operator(i, &format!("zero-{i}"), 1, 0, 0))
        .collect();
    let config = SelectionConfig {
        use_level_weighting: true,
        ..Default::default()
    };

    let mut seen_orders = HashSet::new();
    for seed in 0..20 {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, config, &mut rng).expect("selection should succeed");
        assert_eq!(selection.len(), SQUAD_SIZE);
        assert_eq!(id_set(&selection).len(), SQUAD_SIZE);
        let order: Vec<String> = selection.iter().map(|s| s.operator.name.clone()).collect();
        seen_orders.insert(order);
    }
    assert!(
        seen_orders.len() > 1,
        "zero-weight draws should still vary with the seed"
    );
}

#[test]
fn skill_assignment_follows_rarity_and_elite_rules() {
    let six_two = operator(1, "six-two", 6, 2, 90);
    let five_zero = operator(2, "five-zero", 5, 0, 30);
    let five_two = operator(3, "five-two", 5, 2, 60);
    let four_two = operator(4, "four-two", 4, 2, 50);
    let six_one = operator(5, "six-one", 6, 1, 70);
    let three_zero = operator(6, "three-zero", 3, 0, 40);
    let two_zero = operator(7, "two-zero", 2, 0, 30);

    let mut seen_six_two = HashSet::new();
    let mut seen_five_zero = HashSet::new();
    for seed in 0..300 {
        let mut rng = Rng::new(seed);
        let skill = assign_skill(&six_two, &mut rng);
        assert!((1..=3).contains(&skill));
        seen_six_two.insert(skill);

        let skill = assign_skill(&five_zero, &mut rng);
        assert!((1..=2).contains(&skill));
        seen_five_zero.insert(skill);

        assert!((1..=2).contains(&assign_skill(&five_two, &mut rng)));
        assert!((1..=2).contains(&assign_skill(&four_two, &mut rng)));

        assert_eq!(assign_skill(&six_one, &mut rng), 1);
        assert_eq!(assign_skill(&three_zero, &mut rng), 1);
        assert_eq!(assign_skill(&two_zero, &mut rng), 1);
    }
    assert_eq!(seen_six_two.len(), 3, "all of skills 1-3 should occur");
    assert_eq!(seen_five_zero.len(), 2, "both of skills 1-2 should occur");
}

#[test]
fn six_star_skills_are_roughly_uniform_over_many_trials() {
    let roster: Vec<Operator> = (0..12)
        .map(|i| operator(i, &format!("six-{i}"), 6, 2, 90))
        .collect();

    let mut counts = [0_usize; 3];
    let trials = 600;
    for seed in 0..trials {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, SelectionConfig::default(), &mut rng)
            .expect("selection should succeed");
        for selected in selection {
            counts[(selected.skill - 1) as usize] += 1;
        }
    }

    let total = trials as usize * SQUAD_SIZE;
    let expected = total / 3;
    for (skill, count) in counts.iter().enumerate() {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 5,
            "skill {} count {count} deviates too far from expected {expected}",
            skill + 1
        );
    }
}

#[test]
fn selection_is_sorted_by_elite_then_level_then_rarity() {
    let roster = mixed_roster(40);
    let configs = [
        SelectionConfig::default(),
        SelectionConfig {
            use_level_weighting: true,
            ..Default::default()
        },
    ];
    for config in configs {
        for seed in 0..50 {
            let mut rng = Rng::new(seed);
            let selection =
                select_squad(&roster, config, &mut rng).expect("selection should succeed");
            for pair in selection.windows(2) {
                let a = &pair[0].operator;
                let b = &pair[1].operator;
                let ordered = (b.elite, b.level, b.rarity) <= (a.elite, a.level, a.rarity);
                assert!(
                    ordered,
                    "selection not sorted: ({},{},{}) before ({},{},{})",
                    a.elite, a.level, a.rarity, b.elite, b.level, b.rarity
                );
            }
        }
    }
}

#[test]
fn eleven_operators_fail_with_counts() {
    let roster = mixed_roster(11);
    let mut rng = Rng::new(1);
    let result = select_squad(&roster, SelectionConfig::default(), &mut rng);
    assert_eq!(
        result.unwrap_err(),
        SelectionError::Insufficient {
            required: 12,
            available: 11
        }
    );
}

#[test]
fn unleveled_filter_failure_reports_post_filter_count() {
    // 14 operators, 6 of them elite 0 / level 1: the filter leaves 8, which
    // must surface as a hard failure with the post-filter count.
    let mut roster: Vec<Operator> = (0..8)
        .map(|i| operator(i, &format!("raised-{i}"), 4, 1, 40))
        .collect();
    for i in 0..6 {
        roster.push(operator(100 + i, &format!("fresh-{i}"), 3, 0, 1));
    }

    let config = SelectionConfig {
        ignore_unleveled_base: true,
        ..Default::default()
    };
    let mut rng = Rng::new(5);
    let result = select_squad(&roster, config, &mut rng);
    assert_eq!(
        result.unwrap_err(),
        SelectionError::Insufficient {
            required: 12,
            available: 8
        }
    );

    // Without the filter the same roster selects fine.
    let mut rng = Rng::new(5);
    let selection = select_squad(&roster, SelectionConfig::default(), &mut rng)
        .expect("unfiltered selection should succeed");
    assert_eq!(selection.len(), SQUAD_SIZE);
}

#[test]
fn unleveled_filter_excludes_fresh_operators_from_draws() {
    let mut roster: Vec<Operator> = (0..13)
        .map(|i| operator(i, &format!("raised-{i}"), 5, 1, 50))
        .collect();
    for i in 0..5 {
        roster.push(operator(100 + i, &format!("fresh-{i}"), 5, 0, 1));
    }

    let config = SelectionConfig {
        ignore_unleveled_base: true,
        ..Default::default()
    };
    for seed in 0..50 {
        let mut rng = Rng::new(seed);
        let selection = select_squad(&roster, config, &mut rng).expect("selection should succeed");
        assert!(selection
            .iter()
            .all(|s| !s.operator.name.starts_with("fresh-")));
    }
}

#[test]
fn selection_does_not_mutate_the_roster() {
    let roster = mixed_roster(20);
    let before = roster.clone();
    let mut rng = Rng::new(3);
    select_squad(&roster, SelectionConfig::default(), &mut rng)
        .expect("selection should succeed");
    assert_eq!(roster, before);
}
