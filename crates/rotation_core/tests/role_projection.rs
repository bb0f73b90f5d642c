use rotation_core::{
    project, ProjectionError, ProjectionPolicy, RoleRotation, RotationTable, YearEntry,
};
use std::collections::BTreeSet;

fn association() -> RotationTable {
    RotationTable::association_default()
}

#[test]
fn current_chair_is_chair_this_year() {
    let table = association();
    let result = project(&table, 201, 40, ProjectionPolicy::Deferral).unwrap();
    assert_eq!(result.years_until_chair, 0);
    assert_eq!(result.age_as_chair, 40);
}

#[test]
fn next_unit_is_chair_next_year() {
    let table = association();
    let result = project(&table, 202, 40, ProjectionPolicy::Deferral).unwrap();
    assert_eq!(result.years_until_chair, 1);
    assert_eq!(result.age_as_chair, 41);
}

#[test]
fn current_treasurer_is_treasurer_this_year() {
    let table = association();
    for policy in [ProjectionPolicy::Deferral, ProjectionPolicy::Skip] {
        let result = project(&table, 303, 55, policy).unwrap();
        assert_eq!(result.years_until_treasurer, 0);
        assert_eq!(result.age_as_treasurer, 55);
    }
}

#[test]
fn year_zero_entry_holds_current_holders() {
    let table = association();
    let result = project(&table, 201, 40, ProjectionPolicy::Deferral).unwrap();
    let first = result.entry_for_year(0).expect("schedule should start at year 0");
    assert_eq!(
        *first,
        YearEntry {
            year: 0,
            chair_unit: 201,
            treasurer_unit: 303,
        }
    );
    assert_eq!(result.current_chair_unit, 201);
    assert_eq!(result.current_treasurer_unit, 303);
}

#[test]
fn unknown_unit_fails_before_simulation() {
    let table = association();
    for unit in [404, 406, 0, 999] {
        let err = project(&table, unit, 40, ProjectionPolicy::Deferral).unwrap_err();
        assert_eq!(err, ProjectionError::InvalidUnit(unit));
    }
    assert_eq!(
        project(&table, 404, 40, ProjectionPolicy::Deferral)
            .unwrap_err()
            .to_string(),
        "unit 404 is not in the rotation table"
    );
}

#[test]
fn chair_distances_form_a_permutation() {
    let table = association();
    let chair_idx0 = table.position_of(table.current_chair_unit()).unwrap();
    let mut seen = BTreeSet::new();

    for unit in table.units() {
        let result = project(&table, *unit, 30, ProjectionPolicy::Deferral).unwrap();
        assert!((result.years_until_chair as usize) < table.len());
        assert_eq!(
            table.unit_at(chair_idx0 + result.years_until_chair as usize),
            *unit
        );
        assert!(seen.insert(result.years_until_chair));
    }

    let expected: BTreeSet<u32> = (0..table.len() as u32).collect();
    assert_eq!(seen, expected);
}

#[test]
fn ages_are_current_age_plus_distance() {
    let table = association();
    for policy in [ProjectionPolicy::Deferral, ProjectionPolicy::Skip] {
        for unit in table.units() {
            let result = project(&table, *unit, 37, policy).unwrap();
            assert_eq!(result.current_age, 37);
            assert_eq!(result.age_as_chair, 37 + result.years_until_chair);
            assert_eq!(result.age_as_treasurer, 37 + result.years_until_treasurer);
        }
    }
}

#[test]
fn deferral_schedule_covers_both_milestones_in_year_order() {
    let table = association();
    for unit in table.units() {
        let result = project(&table, *unit, 30, ProjectionPolicy::Deferral).unwrap();
        let schedule = result.schedule.as_ref().expect("deferral records schedule");

        assert_eq!(schedule.len() as u32, result.years_until_both() + 1);
        for (index, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.year as usize, index);
        }
        assert_eq!(
            schedule[result.years_until_chair as usize].chair_unit,
            *unit
        );
        assert_eq!(
            schedule[result.years_until_treasurer as usize].treasurer_unit,
            *unit
        );
    }
}

#[test]
fn no_unit_holds_both_roles_in_one_year() {
    let tables = [
        association(),
        RotationTable::new(vec![1, 2], 1, 1).unwrap(),
        RotationTable::new(vec![1, 2, 3], 1, 2).unwrap(),
        RotationTable::new(vec![1, 2, 3, 4, 5], 3, 3).unwrap(),
        RotationTable::new(vec![1, 2, 3, 4, 5, 6], 2, 5).unwrap(),
    ];
    for table in &tables {
        for policy in [ProjectionPolicy::Deferral, ProjectionPolicy::Skip] {
            for entry in RoleRotation::new(table, policy).take(4 * table.len()) {
                assert_ne!(
                    entry.chair_unit, entry.treasurer_unit,
                    "{policy} year {} in {:?}",
                    entry.year,
                    table.units()
                );
            }
        }
    }
}

#[test]
fn collision_defers_displaced_unit_to_following_year() {
    // Year 4: chair reaches 205 while the treasurer cursor is on 205.
    let table = association();
    let result = project(&table, 205, 30, ProjectionPolicy::Deferral).unwrap();
    let schedule = result.schedule.as_deref().unwrap();

    assert_eq!(schedule[4].chair_unit, 205);
    assert_eq!(schedule[4].treasurer_unit, 204);
    assert_eq!(schedule[5].treasurer_unit, 205);
    assert_eq!(result.years_until_treasurer, 5);
}

#[test]
fn skip_policy_returns_distances_only() {
    let table = association();
    let result = project(&table, 205, 30, ProjectionPolicy::Skip).unwrap();
    assert_eq!(result.schedule, None);
    assert_eq!(result.policy, ProjectionPolicy::Skip);
    assert_eq!(result.years_until_chair, 4);
    // Displaced at year 4 and not carried over: waits for the next cycle.
    assert_eq!(result.years_until_treasurer, 27);
}

#[test]
fn policies_agree_for_units_untouched_by_collisions() {
    let table = association();
    for unit in [303, 204, 206] {
        let deferred = project(&table, unit, 30, ProjectionPolicy::Deferral).unwrap();
        let skipped = project(&table, unit, 30, ProjectionPolicy::Skip).unwrap();
        assert_eq!(deferred.years_until_chair, skipped.years_until_chair);
        assert_eq!(deferred.years_until_treasurer, skipped.years_until_treasurer);
    }
}

#[test]
fn single_unit_table_holds_both_roles_now() {
    let table = RotationTable::new(vec![7], 7, 7).unwrap();
    let result = project(&table, 7, 60, ProjectionPolicy::Deferral).unwrap();
    assert_eq!(result.years_until_chair, 0);
    assert_eq!(result.years_until_treasurer, 0);
    assert_eq!(
        result.schedule,
        Some(vec![YearEntry {
            year: 0,
            chair_unit: 7,
            treasurer_unit: 7,
        }])
    );
}

#[test]
fn independent_tables_do_not_interfere() {
    let small = RotationTable::new(vec![10, 20, 30, 40], 30, 10).unwrap();
    let large = association();

    let small_result = project(&small, 10, 50, ProjectionPolicy::Deferral).unwrap();
    let large_result = project(&large, 201, 50, ProjectionPolicy::Deferral).unwrap();

    assert_eq!(small_result.years_until_chair, 2);
    assert_eq!(small_result.years_until_treasurer, 0);
    assert_eq!(small_result.current_chair_unit, 30);
    assert_eq!(large_result.current_chair_unit, 201);
}

#[test]
fn result_serializes_with_snake_case_fields() {
    let table = association();
    let result = project(&table, 202, 40, ProjectionPolicy::Skip).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["unit"], 202);
    assert_eq!(json["policy"], "skip");
    assert_eq!(json["years_until_chair"], 1);
    assert_eq!(json["age_as_chair"], 41);
    assert_eq!(json["current_treasurer_unit"], 303);
    assert!(json["schedule"].is_null());
}
