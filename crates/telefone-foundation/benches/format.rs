use criterion::{black_box, criterion_group, criterion_main, Criterion};
use telefone_foundation::PhoneFormatter;

// One entry per keystroke-equivalent state a field passes through while a
// number is typed, plus a couple of messy paste payloads.
const SAMPLES: &[&str] = &[
    "9",
    "91",
    "9123",
    "91234",
    "91234-5",
    "91234-5678",
    "2123-4567",
    "(11) 91234-5678",
    "0800 123 4567",
];

fn bench_format(c: &mut Criterion) {
    let formatter = PhoneFormatter::new();
    c.bench_function("format_keystroke_sequence", |b| {
        b.iter(|| {
            for raw in SAMPLES {
                black_box(formatter.format(black_box(raw)));
            }
        })
    });

    c.bench_function("backspace_across_separator", |b| {
        formatter.format("91234");
        b.iter(|| black_box(formatter.backspace_across_separator(black_box("91234-"))))
    });
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
