use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tgwire::types::Update;
use tgwire::{Options, UnknownFields};

fn update_json(entities: usize) -> String {
    let entities: Vec<String> = (0..entities)
        .map(|i| format!(r#"{{"type":"hashtag","offset":{},"length":5}}"#, i * 12 + 6))
        .collect();
    format!(
        concat!(
            r#"{{"update_id":735102001,"message":{{"message_id":4411,"#,
            r#""from":{{"id":51234567,"is_bot":false,"first_name":"Ada"}},"date":1714000000,"#,
            r#""chat":{{"id":-1001987654321,"type":"supergroup","title":"Builders"}},"#,
            r#""text":"hello","entities":[{}]}}}}"#
        ),
        entities.join(",")
    )
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = [("small", update_json(1)), ("entities_1k", update_json(1000))];
    let mut group = c.benchmark_group("decode_update");
    for (name, text) in cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("deny_unknown::{name}"), |b| {
            b.iter_batched(
                || text.clone(),
                |s| black_box(tgwire::from_str::<Update>(&s, &Options::default()).unwrap()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("ignore_unknown::{name}"), |b| {
            let opts = Options {
                unknown_fields: UnknownFields::Ignore,
                ..Options::default()
            };
            b.iter_batched(
                || text.clone(),
                |s| black_box(tgwire::from_str::<Update>(&s, &opts).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
