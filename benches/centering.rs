use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pixel_center::{
    CHAT_WIDTH, Centerer, Logger, MOTD_WIDTH, NullSink, TextNode, center_for, text_width,
};

fn motd_tree() -> TextNode {
    TextNode::empty()
        .with_child(TextNode::text("Welcome to ").with_bold(true))
        .with_child(TextNode::text("Skyblock Network"))
        .with_child(
            TextNode::empty()
                .with_bold(true)
                .with_children([TextNode::text(" ["), TextNode::text("1.21"), TextNode::text("]")]),
        )
}

fn chat_line() -> TextNode {
    TextNode::text("The quick brown fox jumps over the lazy dog, twice! ")
        .with_child(TextNode::text("(and once more in bold)").with_bold(true))
}

fn measure_trees(c: &mut Criterion) {
    let motd = motd_tree();
    let chat = chat_line();
    c.bench_function("text_width_motd", |b| b.iter(|| text_width(black_box(&motd))));
    c.bench_function("text_width_chat", |b| b.iter(|| text_width(black_box(&chat))));
}

fn center_trees(c: &mut Criterion) {
    let motd = motd_tree();
    let chat = chat_line();
    c.bench_function("center_motd", |b| {
        b.iter(|| center_for(black_box(motd.clone()), MOTD_WIDTH))
    });

    let centerer = Centerer::with_default().with_logger(Logger::new(NullSink));
    c.bench_function("centerer_chat_logged", |b| {
        b.iter(|| {
            centerer
                .center(black_box(chat.clone()), CHAT_WIDTH)
                .expect("center")
        })
    });
}

criterion_group!(benches, measure_trees, center_trees);
criterion_main!(benches);
