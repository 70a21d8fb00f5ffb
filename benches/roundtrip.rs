use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sbol2::model::{ComponentDefinition, Range, Sequence, SequenceAnnotation};
use sbol2::{Config, Document};

/// A document with `size` component definitions, each carrying a nested
/// annotation with a range and a reference to its sequence
fn build_doc(size: usize) -> Document {
    let config = Config::with_homespace("http://examples.org");
    let mut doc = Document::with_config(config.clone());

    for i in 0..size {
        let seq = Sequence::new(
            &config,
            &format!("seq{}", i),
            "aacgatcgttggcatgccta",
            "1.0.0",
        )
        .unwrap();
        let seq_uri = seq.identity().to_string();

        let mut cd = ComponentDefinition::new(&config, &format!("cd{}", i), "1.0.0").unwrap();
        ComponentDefinition::SEQUENCES.add(&mut cd, &seq_uri).unwrap();

        let mut sa =
            SequenceAnnotation::new(&config, &format!("sa{}", i), "1.0.0").unwrap();
        let range = Range::new(&config, &format!("r{}", i), 1, 20, "1.0.0").unwrap();
        SequenceAnnotation::LOCATIONS.add(&mut sa, range).unwrap();
        ComponentDefinition::SEQUENCE_ANNOTATIONS.add(&mut cd, sa).unwrap();

        doc.add(cd).unwrap();
        doc.add(seq).unwrap();
    }
    doc
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_rdfxml");
    for size in [10, 100, 1000].iter() {
        let mut doc = build_doc(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let xml = doc.write_string().unwrap();
                criterion::black_box(xml.len());
            });
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rdfxml");
    for size in [10, 100, 1000].iter() {
        let mut doc = build_doc(*size);
        let xml = doc.write_string().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut doc = Document::new();
                doc.read_string(&xml).unwrap();
                criterion::black_box(doc.len());
            });
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    for size in [10, 100].iter() {
        let mut doc = build_doc(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let xml = doc.write_string().unwrap();
                let mut reparsed = Document::new();
                reparsed.read_string(&xml).unwrap();
                criterion::black_box(reparsed.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_parse, bench_round_trip);
criterion_main!(benches);
