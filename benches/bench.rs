// Criterion benchmarks for Recipe Scale

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recipe_scale::core::{convert, infer_scaling_rule, scale_amount, Scaler};
use recipe_scale::models::{Ingredient, Recipe, RuleType, ScalingRule};

const NAMES: [&str; 8] = [
    "flour",
    "water",
    "dry yeast",
    "sea salt",
    "black pepper",
    "vanilla extract",
    "butter",
    "cocoa powder",
];

fn create_ingredient(id: usize) -> Ingredient {
    Ingredient {
        name: NAMES[id % NAMES.len()].to_string(),
        amount: 5.0 + (id % 50) as f64,
        unit: if id % 3 == 0 { "g" } else { "tsp" }.to_string(),
        base_servings: None,
        scaling_rule: None,
    }
}

fn create_recipe(ingredient_count: usize) -> Recipe {
    Recipe {
        title: format!("Recipe with {} ingredients", ingredient_count),
        servings: 4,
        prep_time: Some(20),
        cook_time: Some(45),
        ingredients: (0..ingredient_count).map(create_ingredient).collect(),
    }
}

fn bench_scale_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_amount");

    for rule_type in RuleType::ALL {
        let rule = ScalingRule::new(rule_type, 250.0, 4).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rule_type), &rule, |b, rule| {
            b.iter(|| scale_amount(black_box(rule), black_box(10)));
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("convert_cups_to_ml", |b| {
        b.iter(|| convert(black_box(2.5), black_box("Cups"), black_box("ml")));
    });
}

fn bench_infer_rule(c: &mut Criterion) {
    c.bench_function("infer_scaling_rule", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(infer_scaling_rule(black_box(name)));
            }
        });
    });
}

fn bench_scale_recipe(c: &mut Criterion) {
    let scaler = Scaler::default();

    let mut group = c.benchmark_group("scaling");

    for ingredient_count in [10, 50, 100, 500, 1000].iter() {
        let recipe = create_recipe(*ingredient_count);

        group.bench_with_input(
            BenchmarkId::new("scale_recipe_card", ingredient_count),
            ingredient_count,
            |b, _| {
                b.iter(|| scaler.scale_recipe_card(black_box(&recipe), black_box(12)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scale_amount,
    bench_convert,
    bench_infer_rule,
    bench_scale_recipe
);

criterion_main!(benches);
