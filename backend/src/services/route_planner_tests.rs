use super::*;
use crate::api::{ItemStatus, ScheduleItemType};
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn stop(id: i64, time: Option<&str>, address: Option<&str>) -> ScheduleItem {
    ScheduleItem {
        id,
        title: format!("Stop {}", id),
        item_type: ScheduleItemType::WorkOrder,
        category: None,
        status: ItemStatus::Scheduled,
        priority: None,
        technician_name: Some("Ana".to_string()),
        client_name: None,
        scheduled_date: Some(day()),
        scheduled_time: time.map(str::to_string),
        address: address.map(str::to_string),
        estimated_duration: Some(30),
    }
}

fn plan(stops: Vec<ScheduleItem>) -> RoutePlan {
    RoutePlan {
        technician: "Ana".to_string(),
        date: day(),
        total_estimated_minutes: 0,
        stops,
    }
}

fn ids(plan: &RoutePlan) -> Vec<i64> {
    plan.stops.iter().map(|s| s.id).collect()
}

#[test]
fn test_build_filters_technician_and_date_and_orders_by_time() {
    let mut other_tech = stop(4, Some("07:00"), None);
    other_tech.technician_name = Some("Ben".to_string());
    let mut other_day = stop(5, Some("07:00"), None);
    other_day.scheduled_date = NaiveDate::from_ymd_opt(2026, 10, 18);
    let items = vec![
        stop(1, Some("13:00"), None),
        stop(2, None, None),
        stop(3, Some("08:15"), None),
        other_tech,
        other_day,
    ];
    let route = RoutePlan::build(&items, "Ana", day());
    assert_eq!(ids(&route), vec![3, 1, 2]);
    assert_eq!(route.total_estimated_minutes, 90);
}

#[test]
fn test_move_up_and_down() {
    let mut route = plan(vec![stop(1, None, None), stop(2, None, None), stop(3, None, None)]);
    assert!(route.move_up(2).unwrap());
    assert_eq!(ids(&route), vec![1, 3, 2]);
    assert!(route.move_down(0).unwrap());
    assert_eq!(ids(&route), vec![3, 1, 2]);
}

#[test]
fn test_boundary_moves_are_noops() {
    let mut route = plan(vec![stop(1, None, None), stop(2, None, None)]);
    assert!(!route.move_up(0).unwrap());
    assert!(!route.move_down(1).unwrap());
    assert_eq!(ids(&route), vec![1, 2]);
}

#[test]
fn test_out_of_range_is_an_error() {
    let mut route = plan(vec![stop(1, None, None)]);
    assert_eq!(
        route.move_down(3).unwrap_err(),
        RouteError::IndexOutOfRange { index: 3, len: 1 }
    );
    let mut empty = plan(vec![]);
    assert!(empty.move_up(0).is_err());
}

#[test]
fn test_optimize_sorts_by_address_missing_last() {
    let mut route = plan(vec![
        stop(1, None, Some("palm Ave 4")),
        stop(2, None, None),
        stop(3, None, Some("Ocean Dr 9")),
        stop(4, None, Some("Bay Rd 1")),
    ]);
    route.optimize();
    assert_eq!(ids(&route), vec![4, 3, 1, 2]);
}

#[test]
fn test_apply_order_with_partial_keys() {
    let mut route = plan(vec![stop(1, None, None), stop(2, None, None), stop(3, None, None)]);
    let key = |id| ScheduleKey {
        item_type: ScheduleItemType::WorkOrder,
        id,
    };
    route.apply_order(&[key(3)]).unwrap();
    assert_eq!(ids(&route), vec![3, 1, 2]);
    route.apply_order(&[key(2), key(1), key(3)]).unwrap();
    assert_eq!(ids(&route), vec![2, 1, 3]);
}

#[test]
fn test_apply_order_rejects_unknown_and_duplicate_keys() {
    let mut route = plan(vec![stop(1, None, None)]);
    let foreign = ScheduleKey {
        item_type: ScheduleItemType::MaintenanceOrder,
        id: 1,
    };
    assert_eq!(
        route.apply_order(&[foreign]).unwrap_err(),
        RouteError::UnknownStop(foreign)
    );
    let own = route.keys()[0];
    assert_eq!(
        route.apply_order(&[own, own]).unwrap_err(),
        RouteError::DuplicateStop(own)
    );
}

#[test]
fn test_apply_dispatches_actions() {
    let mut route = plan(vec![stop(1, None, Some("b")), stop(2, None, Some("a"))]);
    route.apply(&RouteAction::Optimize).unwrap();
    assert_eq!(ids(&route), vec![2, 1]);
    route.apply(&RouteAction::MoveUp { index: 1 }).unwrap();
    assert_eq!(ids(&route), vec![1, 2]);
}

#[test]
fn test_route_access_and_build_agree_on_name_case() {
    use crate::api::{SessionContext, SessionUser, UserId};
    use crate::models::Role;

    let session = SessionContext::signed_in(SessionUser {
        id: UserId::new(11),
        name: "Ana".to_string(),
        role: Role::Technician,
        technician_id: None,
        client_id: None,
    });
    let items = vec![stop(1, Some("09:00"), None), stop(2, Some("10:00"), None)];

    for requested in ["ana", " ANA ", "Ana"] {
        assert!(session.can_view_route(requested));
        let route = RoutePlan::build(&items, requested, day());
        assert_eq!(ids(&route), vec![1, 2], "requested {requested:?}");
        assert_eq!(route.technician, "Ana");
    }
}

#[test]
fn test_empty_route_keeps_requested_name() {
    let route = RoutePlan::build(&[stop(1, None, None)], " Ben ", day());
    assert!(route.stops.is_empty());
    assert_eq!(route.technician, "Ben");
}

proptest! {
    #[test]
    fn prop_swaps_are_permutations(len in 1usize..12, index in 0usize..12, up in any::<bool>()) {
        let index = index % len;
        let mut route = plan((0..len as i64).map(|i| stop(i, None, None)).collect());
        let before = ids(&route);
        let moved = if up { route.move_up(index) } else { route.move_down(index) }.unwrap();
        let after = ids(&route);

        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);

        let changed: Vec<usize> = (0..len).filter(|i| before[*i] != after[*i]).collect();
        if moved {
            let other = if up { index - 1 } else { index + 1 };
            let mut expected = vec![index, other];
            expected.sort();
            prop_assert_eq!(changed, expected);
            prop_assert_eq!(after[index], before[other]);
            prop_assert_eq!(after[other], before[index]);
        } else {
            prop_assert!(changed.is_empty());
        }
    }
}
