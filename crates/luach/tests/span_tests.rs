//! Tests for the Hebrew span caption.

use luach::{format_span, LuachError, MonthSpan, SpanEntry};

fn entries(pairs: &[(&str, &str)]) -> Vec<SpanEntry> {
    pairs.iter().map(|(m, y)| SpanEntry::new(*m, *y)).collect()
}

#[test]
fn single_month() {
    let caption = format_span(&entries(&[("Nisan", "5784")])).unwrap();
    assert_eq!(caption.text(), "Nisan 5784");
    assert_eq!(
        caption.to_markup(),
        "<span class='month'>Nisan</span> <span class='year'>5784</span>"
    );
}

#[test]
fn two_months_same_year() {
    let caption = format_span(&entries(&[("Nisan", "5784"), ("Iyyar", "5784")])).unwrap();
    assert_eq!(caption.text(), "Nisan - Iyyar 5784");
    assert_eq!(
        caption.to_markup(),
        "<span class='month'>Nisan</span> - <span class='month'>Iyyar</span> \
         <span class='year'>5784</span>"
    );
}

#[test]
fn two_months_across_new_year() {
    let caption = format_span(&entries(&[("Elul", "5784"), ("Tishrei", "5785")])).unwrap();
    assert_eq!(caption.text(), "Elul 5784 - Tishrei 5785");
    assert_eq!(
        caption.to_markup(),
        "<span class='month'>Elul</span> <span class='year'>5784</span> - \
         <span class='month'>Tishrei</span> <span class='year'>5785</span>"
    );
}

#[test]
fn only_first_two_entries_form_the_range() {
    let caption = format_span(&entries(&[
        ("Elul", "5784"),
        ("Tishrei", "5785"),
        ("Cheshvan", "5785"),
    ]))
    .unwrap();
    assert_eq!(caption.text(), "Elul 5784 - Tishrei 5785");
}

#[test]
fn empty_span_is_an_invariant_violation() {
    assert!(matches!(
        format_span(&[]),
        Err(LuachError::InvariantViolation(_))
    ));
    assert!(MonthSpan::new().caption().is_err());
}

#[test]
fn month_span_keeps_first_seen_order_without_duplicates() {
    let span: MonthSpan = entries(&[
        ("Iyyar", "5784"),
        ("Iyyar", "5784"),
        ("Sivan", "5784"),
        ("Iyyar", "5784"),
    ])
    .into_iter()
    .collect();

    assert_eq!(span.len(), 2);
    assert_eq!(span.entries()[0], SpanEntry::new("Iyyar", "5784"));
    assert_eq!(span.entries()[1], SpanEntry::new("Sivan", "5784"));
    assert_eq!(span.caption().unwrap().text(), "Iyyar - Sivan 5784");
}

#[test]
fn same_month_name_in_different_years_is_distinct() {
    let mut span = MonthSpan::new();
    span.insert(SpanEntry::new("Elul", "5784"));
    span.insert(SpanEntry::new("Elul", "5785"));
    assert_eq!(span.len(), 2);
}
