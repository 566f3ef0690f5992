//! Pure per-field checks. Inputs are the field value plus read-only
//! snapshots; outputs are markers, never side effects.

use crate::pattern;
use log::{debug, info};
use rankwatch_model::{Decision, Marker, Member, Role};

/// Validate the identity field against the member's display name.
///
/// The extracted name and id must both be contained in the display name,
/// case-insensitively. A pattern miss and a mismatch both fail, but they
/// are logged differently for diagnostics.
#[must_use]
pub fn check_identity(field_value: &str, member: &Member) -> Marker {
    let display_name = member.display_name.to_lowercase();

    let Some(claim) = pattern::identity(field_value) else {
        info!("identity pattern not matched: {field_value:?}");
        return Marker::Rejected;
    };

    let name = claim.name.to_lowercase();
    let is_valid = display_name.contains(&name) && display_name.contains(&claim.id);
    if !is_valid {
        debug!(
            "identity mismatch: display name {display_name:?}, expected name {name:?}, expected id {:?}",
            claim.id
        );
    }
    info!("identity status: {is_valid}");

    if is_valid {
        Marker::Approved
    } else {
        Marker::Rejected
    }
}

/// Validate the rank field against the member's roles.
///
/// When the request already carries an approval decision, the target level
/// of the transition is checked; otherwise the current level. Returns `None`
/// when the transition text does not parse, in which case the field is
/// skipped entirely.
#[must_use]
pub fn check_rank(
    field_value: &str,
    request_decision: Decision,
    roles: &[Role],
) -> Option<Marker> {
    let transition = pattern::rank_transition(field_value)?;

    let level = if request_decision == Decision::Approved {
        &transition.new_level
    } else {
        &transition.current_level
    };

    let has_role = roles.iter().any(|role| role.grants_level(level));
    if !has_role {
        let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
        debug!("rank mismatch: member roles {names:?}, expected level prefix {level:?}");
    }
    info!("rank status: {has_role}");

    Some(if has_role {
        Marker::Approved
    } else {
        Marker::Uncertain
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::member_named;
    use pretty_assertions::assert_eq;

    fn roles(names: &[&str]) -> Vec<Role> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Role {
                id: i.to_string(),
                name: (*name).to_string(),
            })
            .collect()
    }

    #[test]
    fn identity_pass_and_fail_by_display_name() {
        let ok = member_named("1000", "иван петров | 1234");
        assert_eq!(check_identity("Иван Петров 1234", &ok), Marker::Approved);

        let wrong_id = member_named("1000", "иван петров | 9999");
        assert_eq!(check_identity("Иван Петров 1234", &wrong_id), Marker::Rejected);
    }

    #[test]
    fn identity_pattern_miss_is_rejected() {
        let m = member_named("1000", "иван петров | 1234");
        assert_eq!(check_identity("???", &m), Marker::Rejected);
    }

    #[test]
    fn rank_uses_current_level_until_approved() {
        let text = "Стрелок [1] → Сержант [2]";
        let current = roles(&["1 | Стрелок"]);
        let target = roles(&["2 | Сержант"]);

        assert_eq!(
            check_rank(text, Decision::Undecided, &current),
            Some(Marker::Approved)
        );
        assert_eq!(
            check_rank(text, Decision::Undecided, &target),
            Some(Marker::Uncertain)
        );
        assert_eq!(
            check_rank(text, Decision::Approved, &target),
            Some(Marker::Approved)
        );
        assert_eq!(
            check_rank(text, Decision::Approved, &current),
            Some(Marker::Uncertain)
        );
    }

    #[test]
    fn rank_without_any_matching_role_is_uncertain() {
        assert_eq!(
            check_rank("Стрелок [1] → Сержант [2]", Decision::Undecided, &[]),
            Some(Marker::Uncertain)
        );
    }

    #[test]
    fn unparsable_rank_text_skips_the_field() {
        assert_eq!(check_rank("повышение", Decision::Undecided, &[]), None);
    }
}
