//! Benchmarks for the hover/press state machine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tether_core::geometry::Rect;
use tether_input::{InputEvent, MouseButton, MouseState};
use tether_ui::Interaction;

fn scripted_events(count: usize) -> Vec<InputEvent> {
    let button = MouseButton::Left;
    (0..count)
        .map(|i| {
            let x = (i % 80) as i32;
            let y = 20;
            match i % 4 {
                0 | 1 => InputEvent::MouseMotion { x, y },
                2 => InputEvent::MouseButtonDown { button, x, y },
                _ => InputEvent::MouseButtonUp { button, x, y },
            }
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/update");
    let rect = Rect::new(10, 10, 50, 20);

    for count in [100, 1_000, 10_000] {
        let events = scripted_events(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| {
                let mut mouse = MouseState::new();
                let mut interaction = Interaction::new();
                let mut clicks = 0;
                for event in events {
                    mouse.update(event);
                    interaction.update(rect, &mouse);
                    clicks += interaction.is_clicked() as u32;
                }
                black_box(clicks)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
