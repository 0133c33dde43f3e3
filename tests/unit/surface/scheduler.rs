use super::*;

#[test]
fn requests_hand_out_unique_ids_in_order() {
    let mut s = ManualScheduler::new();
    let a = s.request();
    let b = s.request();
    assert_ne!(a, b);
    assert_eq!(s.pending_count(), 2);
    assert_eq!(s.fire(), Some(a));
    assert_eq!(s.fire(), Some(b));
    assert_eq!(s.fire(), None);
}

#[test]
fn cancel_withdraws_a_pending_request() {
    let mut s = ManualScheduler::new();
    let a = s.request();
    let b = s.request();
    s.cancel(a);
    assert_eq!(s.pending_count(), 1);
    assert_eq!(s.fire(), Some(b));
}

#[test]
fn cancel_of_fired_or_unknown_id_is_ignored() {
    let mut s = ManualScheduler::new();
    let a = s.request();
    assert_eq!(s.fire(), Some(a));
    s.cancel(a);
    s.cancel(TickId(999));
    assert_eq!(s.pending_count(), 0);
}
