//! Integration tests for the picker components.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use horizon_datepicker::{
    Button, DatePickError, DatePicker, DateRangePicker, Element, FormatError, InputDate,
    InputDateRange, Justify, OverlayPhase, RangeArityError, Reactive, Row,
};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_datepicker=trace")
        .with_test_writer()
        .try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_typed_date_replaces_value() {
    setup();
    let day = Reactive::new(Some(date(2024, 1, 15)));
    let input = InputDate::new(day.clone())
        .with_date_format("%Y-%m-%d")
        .mount()
        .unwrap();
    assert_eq!(input.display(), "2024-01-15");

    assert_eq!(input.submit_text("2024-02-20"), Ok(true));
    assert_eq!(day.get(), Some(date(2024, 2, 20)));
    assert_eq!(input.display(), "2024-02-20");
}

#[test]
fn test_bad_text_is_reported_and_ignored() {
    setup();
    let day = Reactive::new(Some(date(2024, 1, 15)));
    let input = InputDate::new(day.clone())
        .with_date_format("%Y-%m-%d")
        .mount()
        .unwrap();

    let err = input.submit_text("not-a-date").unwrap_err();
    assert!(matches!(err, DatePickError::Format(FormatError::Mismatch { .. })));
    assert_eq!(day.get(), Some(date(2024, 1, 15)));
    assert_eq!(input.display(), "2024-01-15");
}

#[test]
fn test_range_from_two_picks() {
    setup();
    let dates = Reactive::new(Vec::new());
    let picker = DateRangePicker::new(dates.clone()).mount().unwrap();

    picker.activate();
    picker.pick(date(2024, 3, 1)).unwrap();
    assert_eq!(dates.get(), vec![date(2024, 3, 1)]);
    assert_eq!(picker.display(), "2024-03-01");

    picker.pick(date(2024, 3, 10)).unwrap();
    assert_eq!(dates.get(), vec![date(2024, 3, 1), date(2024, 3, 10)]);
    assert_eq!(picker.display(), "2024-03-01 - 2024-03-10");
    assert_eq!(picker.phase(), OverlayPhase::Open);
}

#[test]
fn test_plain_open_default_is_never_written() {
    setup();
    let open = false;
    let picker = DatePicker::new(Reactive::new(None))
        .with_open(open)
        .mount()
        .unwrap();

    assert_eq!(picker.activate(), OverlayPhase::Open);
    let view = picker.render();
    assert!(view.open);

    let close = view.content.children[0].find_button("close").unwrap();
    assert!(picker.click(close));
    assert_eq!(picker.phase(), OverlayPhase::Closed);
    assert!(!open);
}

// =========================================================================
// Overlay wiring
// =========================================================================

#[test]
fn test_selecting_does_not_close() {
    let picker = InputDate::new(Reactive::new(None)).mount().unwrap();
    picker.activate();

    picker.pick(date(2024, 8, 1)).unwrap();
    picker.report_dates(vec![date(2024, 8, 2)]).unwrap();
    picker.report_calendar(&["2024-08-03".to_string()]).unwrap();

    assert!(picker.is_open());
    assert_eq!(picker.value(), Some(date(2024, 8, 3)));
}

#[test]
fn test_closing_keeps_value() {
    let day = Reactive::new(None);
    let picker = DatePicker::new(day.clone()).mount().unwrap();
    picker.activate();
    picker.pick(date(2024, 8, 1)).unwrap();
    picker.close();

    assert_eq!(day.get(), Some(date(2024, 8, 1)));
}

#[test]
fn test_caller_children_replace_close_control() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let clicks_clone = clicks.clone();

    let picker = DateRangePicker::new(Reactive::new(Vec::new()))
        .with_children([
            Element::from("Nights are counted from check-in"),
            Row::new([
                Button::new("Cancel"),
                Button::new("Done").on_click(move |close| {
                    clicks_clone.fetch_add(1, Ordering::SeqCst);
                    close.close();
                }),
            ])
            .with_justify(Justify::SpaceBetween)
            .into(),
        ])
        .mount()
        .unwrap();

    let view = picker.render();
    assert_eq!(view.content.children.len(), 2);
    assert!(matches!(view.content.children[0], Element::Text(_)));
    assert!(view.content.children[1].find_button("close").is_none());

    picker.activate();
    let cancel = view.content.children[1].find_button("Cancel").unwrap();
    assert!(!picker.click(cancel));
    assert!(picker.is_open());

    let done = view.content.children[1].find_button("Done").unwrap();
    assert!(picker.click(done));
    assert!(!picker.is_open());
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shared_open_flag_passthrough() {
    let open = Reactive::new(false);
    let picker = InputDateRange::new(Reactive::new(Vec::new()))
        .with_open(&open)
        .mount()
        .unwrap();

    open.set(true);
    assert!(picker.render().open);
    open.set(false);
    assert!(!picker.render().open);

    picker.activate();
    assert!(open.get());
    picker.close_handle().close();
    assert!(!open.get());
}

#[test]
fn test_rebind_open() {
    let mut picker = DatePicker::new(Reactive::new(None))
        .with_open(true)
        .mount()
        .unwrap();
    picker.close();

    picker.rebind_open(true);
    assert!(!picker.is_open());

    let open = Reactive::new(true);
    picker.rebind_open(&open);
    assert!(picker.is_open());
    picker.close();
    assert!(!open.get());
}

// =========================================================================
// Shared cells
// =========================================================================

#[test]
fn test_binders_sharing_a_cell() {
    let day = Reactive::new(Some(date(2024, 1, 15)));
    let input = InputDate::new(day.clone()).mount().unwrap();
    let picker = DatePicker::new(day.clone()).mount().unwrap();

    input.submit_text("2024/06/30").unwrap();
    assert_eq!(picker.display(), "2024-06-30");

    picker.pick(date(2024, 7, 1)).unwrap();
    assert_eq!(input.display(), "2024/07/01");

    day.set(None);
    assert_eq!(input.display(), "");
    assert_eq!(picker.display(), "");
}

#[test]
fn test_unmount_disconnects() {
    let day = Reactive::new(None);
    let first = DatePicker::new(day.clone()).mount().unwrap();
    let second = InputDate::new(day.clone()).mount().unwrap();
    assert_eq!(day.subscriber_count(), 2);

    drop(first);
    assert_eq!(day.subscriber_count(), 1);
    drop(second);
    assert_eq!(day.subscriber_count(), 0);
    assert!(day.set(Some(date(2024, 1, 1))));
}

#[test]
fn test_range_arity_guard() {
    let dates = Reactive::new(vec![date(2024, 3, 1)]);
    let picker = DateRangePicker::new(dates.clone()).mount().unwrap();

    let err = picker
        .report_dates(vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)])
        .unwrap_err();
    assert_eq!(err, DatePickError::RangeArity(RangeArityError { len: 3, max: 2 }));
    assert_eq!(dates.get(), vec![date(2024, 3, 1)]);
    assert_eq!(picker.display(), "2024-03-01");
}

#[test]
fn test_range_pick_restarts_after_complete_pair() {
    let dates = Reactive::new(vec![date(2024, 3, 1), date(2024, 3, 10)]);
    let picker = InputDateRange::new(dates.clone()).mount().unwrap();

    picker.pick(date(2024, 4, 2)).unwrap();
    assert_eq!(dates.get(), vec![date(2024, 4, 2)]);

    picker.pick(date(2024, 3, 28)).unwrap();
    assert_eq!(dates.get(), vec![date(2024, 3, 28), date(2024, 4, 2)]);
    assert_eq!(picker.display(), "2024/03/28 - 2024/04/02");
}
