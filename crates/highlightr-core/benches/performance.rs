use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use highlightr_core::{
    CommandExecutor, Position, RopeBuffer, STRIP_COMMAND_ID, Settings, TextBuffer,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 96);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the <mark style=\"background: #FFF3A3A6;\">quick</mark> brown fox jumps over the lazy dog\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_toggle_in_middle(c: &mut Criterion) {
    let text = large_text(50_000);
    let settings = Settings::default();
    let prefix_len = settings.find("Yellow").unwrap().template().prefix_len();
    let executor = CommandExecutor::from_settings(&settings).unwrap();
    // "brown" on line 25_000
    let brown = "025000 the ".len() + prefix_len + "quick</mark> ".len();
    c.bench_function("toggle_middle/wrap_unwrap", |b| {
        b.iter_batched(
            || {
                let mut buffer = RopeBuffer::new(&text);
                buffer.select(Position::new(25_000, brown), Position::new(25_000, brown + 5));
                debug_assert_eq!(buffer.selection_text(), "brown");
                buffer
            },
            |mut buffer| {
                executor.execute("Yellow", &mut buffer).unwrap();
                let inner = brown + prefix_len;
                buffer.select(Position::new(25_000, inner), Position::new(25_000, inner + 5));
                executor.execute("Yellow", &mut buffer).unwrap();
                black_box(buffer.line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_strip_large_selection(c: &mut Criterion) {
    let text = large_text(5_000);
    let executor = CommandExecutor::from_settings(&Settings::default()).unwrap();
    c.bench_function("strip/5k_lines", |b| {
        b.iter_batched(
            || {
                let mut buffer = RopeBuffer::new(&text);
                buffer.select(Position::new(0, 0), Position::new(usize::MAX, 0));
                buffer
            },
            |mut buffer| {
                let result = executor.execute(STRIP_COMMAND_ID, &mut buffer).unwrap();
                black_box(result);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_toggle_in_middle, bench_strip_large_selection);
criterion_main!(benches);
