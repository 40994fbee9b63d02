use std::time::Duration;

use chatkit_foundation::prelude::*;
use chatkit_foundation::LinkItem;
use chatkit_testing::{MessageFactory, TestDataSource};
use chatkit_ui_graphics::Size;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CONVERSATION_SAMPLES: &[usize] = &[100, 1000];
const BOUNDS: Size = Size::new(390.0, 844.0);

const LINES: &[&str] = &[
    "Hey!",
    "Are we still on for tomorrow?",
    "I pushed the fix to the branch, the layout tests pass locally now but CI is still slow.",
    "👍",
    "Sounds good, see you at ten.",
];

fn conversation(count: usize) -> TestDataSource {
    let mut factory = MessageFactory::new();
    let messages: Vec<_> = (0..count)
        .map(|i| {
            let from_me = i % 3 == 0;
            match i % 7 {
                3 => factory.photo(from_me, Size::new(1200.0, 900.0)),
                5 => factory.audio(from_me, Duration::from_secs(i as u64 % 300)),
                6 => factory.link(
                    from_me,
                    LinkItem::new(LINES[i % LINES.len()], "https://example.com/post")
                        .with_title("Release notes"),
                ),
                _ => factory.text(from_me, LINES[i % LINES.len()]),
            }
        })
        .collect();
    let mut source = TestDataSource::with_messages(factory.me().clone(), messages);
    for section in (0..count).step_by(10) {
        source.set_label(IndexPosition::section(section), LabelSlot::CellTop, "Today 09:41");
    }
    source
}

struct LayoutFixture {
    source: TestDataSource,
    layout: MessagesLayout,
}

impl LayoutFixture {
    fn new(count: usize) -> Self {
        let mut layout = MessagesLayout::default();
        layout.set_bounds(BOUNDS);
        Self {
            source: conversation(count),
            layout,
        }
    }

    fn content_height(&mut self) -> f32 {
        let sources = Sources::new(&self.source);
        self.layout.content_height(&sources)
    }
}

fn bench_cold_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_cold");
    for &count in CONVERSATION_SAMPLES {
        group.bench_with_input(BenchmarkId::new("messages", count), &count, |b, &count| {
            let mut fixture = LayoutFixture::new(count);
            b.iter(|| {
                fixture.layout.reload_data();
                black_box(fixture.content_height());
            });
        });
    }
    group.finish();
}

fn bench_warm_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_warm");
    for &count in CONVERSATION_SAMPLES {
        group.bench_with_input(BenchmarkId::new("messages", count), &count, |b, &count| {
            let mut fixture = LayoutFixture::new(count);
            // Fill the cache so only lookups are measured.
            fixture.content_height();
            b.iter(|| black_box(fixture.content_height()));
        });
    }
    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_width_change");
    for &count in CONVERSATION_SAMPLES {
        group.bench_with_input(BenchmarkId::new("messages", count), &count, |b, &count| {
            let mut fixture = LayoutFixture::new(count);
            let mut landscape = false;
            b.iter(|| {
                landscape = !landscape;
                let bounds = if landscape {
                    Size::new(BOUNDS.height, BOUNDS.width)
                } else {
                    BOUNDS
                };
                fixture.layout.set_bounds(bounds);
                black_box(fixture.content_height());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cold_layout, bench_warm_layout, bench_rotation);
criterion_main!(benches);
