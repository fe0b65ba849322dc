use criterion::{Criterion, criterion_group, criterion_main};
use decksim_core::{
    CardTable, CompiledCombo, EntropySource, TrialRunner, count_by_id, parse_combo, parse_deck,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn trial_throughput(c: &mut Criterion) {
    let deck = parse_deck("40 total\n3 card a\n3 card b\n3 card c\n1 card d\n").deck;
    let combo = parse_combo("card a + (card b | card c)\ncard d\n").combo;
    let mut table = CardTable::new();
    let deck_ids = deck.intern(&mut table);
    let compiled = CompiledCombo::compile(&combo, &mut table);
    let deck_counts = count_by_id(&deck_ids, table.len());
    let mut runner = TrialRunner::with_source(
        deck_ids,
        deck_counts,
        compiled,
        5,
        EntropySource::new(StdRng::seed_from_u64(1)),
    );
    c.bench_function("trials_10k_deck40", |b| b.iter(|| runner.run(10_000)));
}

criterion_group!(benches, trial_throughput);
criterion_main!(benches);
