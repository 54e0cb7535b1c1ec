use kitchen::PanelState;

#[test]
fn switching_hotspots_keeps_one_active() {
    let mut st = PanelState::new();
    let first = st.activate(0);
    assert!(st.complete(&first));
    let second = st.activate(2);
    assert_eq!(st.active(), Some(2));
    assert!(!st.is_current(&first));
    assert!(st.complete(&second));
    assert!(st.is_open());
}

#[test]
fn stale_ticket_is_discarded() {
    let mut st = PanelState::new();
    let slow = st.activate(0);
    let fast = st.activate(1);
    assert!(st.complete(&fast));
    assert!(!st.complete(&slow));
    assert_eq!(st.active(), Some(1));
}

#[test]
fn close_invalidates_pending_render() {
    let mut st = PanelState::new();
    let t = st.activate(0);
    st.complete(&t);
    let pending = st.activate(1);
    assert_eq!(st.close(), Some(Some(1)));
    assert!(!st.complete(&pending));
    assert!(!st.is_open());
    assert_eq!(st.close(), None);
}
