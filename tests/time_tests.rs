use wellington::shared::Time;

#[test]
fn valid_hhmm_test_1() {
    assert_eq!(Time::from_hhmm(0).unwrap().as_minutes(), 0);
}

#[test]
fn valid_hhmm_test_2() {
    assert_eq!(Time::from_hhmm(735).unwrap().as_minutes(), 455);
}

#[test]
fn valid_hhmm_test_3() {
    assert_eq!(Time::from_hhmm(2359).unwrap().as_minutes(), 1439);
}

#[test]
fn past_midnight_hhmm() {
    let time = Time::from_hhmm(2415).unwrap();
    assert_eq!(time.hours(), 24);
    assert_eq!(time.to_string(), "24:15");
}

#[test]
fn invalid_hhmm_test() {
    assert!(Time::from_hhmm(760).is_none());
}

#[test]
fn ordering_follows_clock() {
    let early = Time::from_hhmm(959).unwrap();
    let late = Time::from_hhmm(1000).unwrap();
    assert!(early < late);
    assert_eq!(Time::from_hm("10:00"), Some(late));
}

#[test]
fn now_is_within_a_day() {
    assert!(Time::now().as_minutes() < 24 * 60);
}
