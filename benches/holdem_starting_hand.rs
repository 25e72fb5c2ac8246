#[macro_use]
extern crate criterion;
extern crate rs_poker_equity;

use criterion::Criterion;
use rs_poker_equity::core::Deck;
use rs_poker_equity::holdem::{CanonicalHand, canonicalize};

fn all_starting(c: &mut Criterion) {
    c.bench_function("Generate all starting hands", |b| b.iter(CanonicalHand::all));
}

fn iter_everything(c: &mut Criterion) {
    c.bench_function("Iter all possible hads from all starting hands", |b| {
        b.iter(|| -> usize {
            CanonicalHand::all()
                .iter()
                .map(|sh| -> usize { sh.possible_hands().len() })
                .sum()
        })
    });
}

fn canonicalize_deck(c: &mut Criterion) {
    let cards: Vec<_> = Deck::new().into_iter().collect();
    c.bench_function("Canonicalize every pair of cards", move |b| {
        b.iter(|| {
            cards
                .iter()
                .flat_map(|x| cards.iter().map(move |y| canonicalize(*x, *y)))
                .filter(CanonicalHand::is_suited)
                .count()
        })
    });
}

criterion_group!(benches, all_starting, iter_everything, canonicalize_deck);
criterion_main!(benches);
