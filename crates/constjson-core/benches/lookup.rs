use std::hint::black_box;

use constjson_core::{path, Document, PathKey, Value};
use criterion::{criterion_group, criterion_main, Criterion};

/// An object with `width` keys, each holding an array of small objects.
fn wide_document(width: usize) -> String {
    let mut out = String::from("{\n");
    for i in 0..width {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&format!("  \"key{i}\": ["));
        for j in 0..8 {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!(
                "{{\"id\": {j}, \"name\": \"item {i}-{j}\", \"score\": {j}.5}}"
            ));
        }
        out.push(']');
    }
    out.push_str("\n}\n");
    out
}

fn bench_lookup(c: &mut Criterion) {
    let text = wide_document(200);
    let doc = Document::parse(&text).unwrap();

    c.bench_function("get first key", |b| {
        b.iter(|| doc.get(black_box(&path!["key0", 0, "id"])).unwrap())
    });

    c.bench_function("get last key", |b| {
        b.iter(|| doc.get(black_box(&path!["key199", 7, "score"])).unwrap())
    });

    c.bench_function("get_or missing key", |b| {
        let path = [PathKey::Key("absent")];
        b.iter(|| doc.get_or(black_box(&path), Value::NULL).unwrap())
    });

    c.bench_function("validate whole document", |b| {
        b.iter(|| black_box(doc).validate().unwrap())
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
