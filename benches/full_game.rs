use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use war_engine::core::{DeckTemplate, GameRng};
use war_engine::presentation::RecordingPresenter;
use war_engine::{Card, Deck, Suit, WarGameBuilder};

/// Shuffled games usually cycle, so this measures 5,000 capped rounds.
fn capped_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("capped_game");
    for (name, template) in [("standard", DeckTemplate::Standard), ("numeric", DeckTemplate::Numeric)] {
        group.bench_function(BenchmarkId::new("5000_rounds", name), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut game = WarGameBuilder::new()
                    .seed(seed)
                    .template(template.clone())
                    .round_limit(5_000)
                    .build(RecordingPresenter::new());
                black_box(game.play_to_completion().expect("headless game"))
            })
        });
    }
    group.finish();
}

/// A game that always ends: four equal cards, two wars, a draw.
fn finished_game(c: &mut Criterion) {
    let template: Vec<_> = Suit::ALL.iter().map(|&suit| Card::new(7, suit)).collect();
    c.bench_function("finished_game", |b| {
        b.iter(|| {
            let mut game = WarGameBuilder::new()
                .seed(1)
                .template(DeckTemplate::Custom(template.clone()))
                .build(RecordingPresenter::new());
            black_box(game.play_to_completion().expect("finished game"))
        })
    });
}

fn shuffle_and_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    c.bench_function("shuffle_and_deal", |b| {
        b.iter(|| black_box(Deck::from_template(&DeckTemplate::Standard).deal(&mut rng)))
    });
}

criterion_group!(benches, capped_game, finished_game, shuffle_and_deal);
criterion_main!(benches);
