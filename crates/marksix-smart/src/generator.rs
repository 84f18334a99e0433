// Selection validation, pattern remapping and type labels.

use std::collections::BTreeSet;

use marksix_core::locale::{self, Language, Message};
use marksix_core::number::{self, COMBINATION_SIZE, Combination};

use crate::SmartError;
use crate::registry::CombinationType;

/// Collapse the selection into its sorted distinct values, or `None` if it
/// does not fit `ty`.
fn sorted_selection(selection: &[u32], ty: &CombinationType) -> Option<Vec<u32>> {
    let distinct: BTreeSet<u32> = selection.iter().copied().collect();
    if distinct.len() != ty.input_count() || !distinct.iter().all(|&n| number::in_range(n)) {
        return None;
    }
    Some(distinct.into_iter().collect())
}

/// Check that `selection` holds exactly `ty.input_count()` distinct values,
/// all within 1..=49.
///
/// Duplicates collapse before counting, so a repeated number leaves the
/// selection one short.
pub fn validate(selection: &[u32], ty: &CombinationType) -> bool {
    sorted_selection(selection, ty).is_some()
}

/// Generate the combinations of `ty` for `selection`.
///
/// The selection is sorted ascending, then every pattern (in registry order)
/// picks its indices out of the sorted values. The input order therefore has
/// no effect on the output.
pub fn generate(selection: &[u32], ty: &CombinationType) -> Result<Vec<Combination>, SmartError> {
    let sorted = sorted_selection(selection, ty).ok_or(SmartError::InvalidSelection {
        required: ty.input_count(),
    })?;

    let combinations = ty
        .patterns()
        .iter()
        .map(|pattern| {
            let mut combination: Combination = [0; COMBINATION_SIZE];
            for (slot, &index) in combination.iter_mut().zip(pattern) {
                *slot = sorted[index];
            }
            combination
        })
        .collect();
    Ok(combinations)
}

/// English label, e.g. `"Smart Combination 9 (10-16, 5/6)"`.
pub fn describe(ty: &CombinationType) -> String {
    describe_lang(ty, Language::English)
}

/// Label in the given language, e.g. `"聰明組合 9 (10-16, 5/6)"`.
pub fn describe_lang(ty: &CombinationType, lang: Language) -> String {
    let (matched, of) = ty.match_guarantee();
    format!(
        "{} {} ({}-{}, {}/{})",
        locale::message(Message::TypeLabel, lang),
        ty.id(),
        ty.input_count(),
        ty.output_count(),
        matched,
        of
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u32; 10] = [3, 7, 12, 19, 22, 28, 31, 35, 40, 49];

    fn smart_9() -> &'static CombinationType {
        CombinationType::by_id(9).unwrap()
    }

    #[test]
    fn first_pattern_takes_lowest_six() {
        let combos = generate(&SAMPLE, smart_9()).unwrap();
        assert_eq!(combos[0], [3, 7, 12, 19, 22, 28]);
    }

    #[test]
    fn second_pattern_follows_indices() {
        // [1, 2, 3, 6, 7, 9]
        let combos = generate(&SAMPLE, smart_9()).unwrap();
        assert_eq!(combos[1], [7, 12, 19, 31, 35, 49]);
    }

    #[test]
    fn last_pattern_follows_indices() {
        // [2, 4, 5, 6, 8, 9]
        let combos = generate(&SAMPLE, smart_9()).unwrap();
        assert_eq!(combos[15], [12, 22, 28, 31, 40, 49]);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let shuffled = [49, 3, 40, 7, 35, 12, 31, 19, 28, 22];
        assert_eq!(
            generate(&shuffled, smart_9()).unwrap(),
            generate(&SAMPLE, smart_9()).unwrap()
        );
    }

    #[test]
    fn custom_type_single_pattern() {
        let ty = CombinationType::new(1, 10, &[[0, 1, 2, 3, 4, 5]], (6, 6)).unwrap();
        let combos = generate(&SAMPLE, &ty).unwrap();
        assert_eq!(combos, vec![[3, 7, 12, 19, 22, 28]]);
    }

    #[test]
    fn pattern_order_is_preserved() {
        let ty = CombinationType::new(1, 10, &[[9, 0, 8, 1, 7, 2]], (1, 6)).unwrap();
        let combos = generate(&SAMPLE, &ty).unwrap();
        assert_eq!(combos, vec![[49, 3, 40, 7, 35, 12]]);
    }

    #[test]
    fn too_few_numbers() {
        let err = generate(&SAMPLE[..9], smart_9()).unwrap_err();
        assert_eq!(err, SmartError::InvalidSelection { required: 10 });
    }

    #[test]
    fn too_many_numbers() {
        let eleven = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        assert!(!validate(&eleven, smart_9()));
    }

    #[test]
    fn fifty_is_out_of_range() {
        let mut sel = SAMPLE;
        sel[9] = 50;
        assert!(!validate(&sel, smart_9()));
        assert_eq!(
            generate(&sel, smart_9()),
            Err(SmartError::InvalidSelection { required: 10 })
        );
    }

    #[test]
    fn zero_is_out_of_range() {
        let mut sel = SAMPLE;
        sel[0] = 0;
        assert!(!validate(&sel, smart_9()));
    }

    #[test]
    fn duplicate_leaves_selection_short() {
        let dup = [3, 3, 12, 19, 22, 28, 31, 35, 40, 49];
        assert!(!validate(&dup, smart_9()));
    }

    #[test]
    fn duplicate_on_top_of_full_set_is_collapsed() {
        let with_dup = [3, 7, 12, 19, 22, 28, 31, 35, 40, 49, 22];
        assert!(validate(&with_dup, smart_9()));
        assert_eq!(
            generate(&with_dup, smart_9()).unwrap(),
            generate(&SAMPLE, smart_9()).unwrap()
        );
    }

    #[test]
    fn boundaries_accepted() {
        let sel = [1, 2, 3, 4, 5, 45, 46, 47, 48, 49];
        assert!(validate(&sel, smart_9()));
    }

    #[test]
    fn describe_smart_9() {
        assert_eq!(describe(smart_9()), "Smart Combination 9 (10-16, 5/6)");
        assert_eq!(
            describe_lang(smart_9(), Language::TraditionalChinese),
            "聰明組合 9 (10-16, 5/6)"
        );
    }

    #[test]
    fn describe_wheel_7() {
        let ty = CombinationType::by_id(7).unwrap();
        assert_eq!(describe(ty), "Smart Combination 7 (7-7, 6/6)");
    }
}
