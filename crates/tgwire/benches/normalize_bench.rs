use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tgwire::types::*;
use tgwire::{Options, Validation};

fn keyboard(rows: usize) -> InlineKeyboardMarkup {
    let rows = (0..rows)
        .map(|r| {
            (0..4)
                .map(|c| InlineKeyboardButton::with_callback_data(format!("{r}:{c}"), format!("cb:{r}:{c}")))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

fn message_update(entities: usize, rows: usize) -> Update {
    let mut chat = Chat::new(-1_001_987_654_321, ChatType::Supergroup);
    chat.title = Some("Builders".into());
    let mut msg = Message::new(4411, 1_714_000_000, chat);
    msg.from = Some(User::new(51_234_567, false, "Ada"));
    msg.text = Some("hello #rust ".repeat(entities));
    msg.entities = Some(
        (0..entities)
            .map(|i| MessageEntity::new(MessageEntityType::Hashtag, (i * 12 + 6) as i64, 5))
            .collect(),
    );
    msg.photo = Some(vec![
        PhotoSize::new("AgAD-small", "u-small", 90, 90),
        PhotoSize::new("AgAD-large", "u-large", 1280, 1280),
    ]);
    msg.reply_markup = Some(keyboard(rows));
    let mut update = Update::new(735_102_001);
    update.message = Some(msg);
    update
}

pub fn normalize_benchmarks(c: &mut Criterion) {
    let cases = [
        ("small", message_update(2, 1)),
        ("entities_500", message_update(500, 1)),
        ("keyboard_100x4", message_update(0, 100)),
    ];
    let mut group = c.benchmark_group("normalize_update");
    for (name, update) in cases {
        let size = tgwire::to_string(&update, &Options::default()).map(|s| s.len()).unwrap_or(0);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("strict::{name}"), |b| {
            b.iter_batched(
                || update.clone(),
                |u| black_box(tgwire::normalize(&u).unwrap()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("off::{name}"), |b| {
            let opts = Options {
                validation: Validation::Off,
                ..Options::default()
            };
            b.iter_batched(
                || update.clone(),
                |u| black_box(tgwire::normalize_with(&u, &opts).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_benchmarks);
criterion_main!(benches);
