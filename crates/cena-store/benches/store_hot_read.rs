use cena_core::{IngredientId, Name};
use cena_model::{Ingredient, MeasurementType};
use cena_store::{InMemoryIngredientRepository, IngredientRepository, Repository};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn seeded_repository(size: usize) -> (InMemoryIngredientRepository, IngredientId) {
    let repo = InMemoryIngredientRepository::new();
    let mut last = IngredientId::generate();
    for i in 0..size {
        let ingredient = Ingredient::new(
            IngredientId::generate(),
            Name::parse(&format!("ingredient {i}")).expect("name"),
            vec![MeasurementType::Weight],
        );
        last = ingredient.id;
        repo.save(ingredient);
    }
    (repo, last)
}

fn bench_store_hot_read(c: &mut Criterion) {
    let (repo, id) = seeded_repository(2_000);
    let lookup = Name::parse("INGREDIENT 1999").expect("lookup");

    c.bench_function("store_hot_read_find_by_id", |b| {
        b.iter(|| repo.find_by_id(black_box(&id)).expect("ingredient"))
    });

    c.bench_function("store_hot_read_find_by_name", |b| {
        b.iter(|| repo.find_by_name_ignore_case(black_box(&lookup)).expect("ingredient"))
    });

    c.bench_function("store_hot_read_find_all", |b| b.iter(|| repo.find_all()));
}

criterion_group!(benches, bench_store_hot_read);
criterion_main!(benches);
