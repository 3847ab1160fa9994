use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use luach::{CalendarConfig, CalendarRenderer, Event, Recurrence};
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let renderer = CalendarRenderer::new(CalendarConfig::default());
    let today = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
    let weekly = Recurrence::new(
        "FREQ=WEEKLY;BYDAY=SU,MO",
        NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
    .with_count(10);

    c.bench_function("render_month_no_events", |b| {
        b.iter(|| {
            renderer
                .render(black_box(2024), black_box(10), today, Vec::<Event>::new())
                .unwrap()
        })
    });

    c.bench_function("render_month_weekly_event", |b| {
        b.iter(|| {
            let event =
                Event::from_rrule("weekly", "Weekly", &weekly, chrono_tz::Asia::Jerusalem).unwrap();
            renderer
                .render(black_box(2024), black_box(10), today, vec![event])
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
