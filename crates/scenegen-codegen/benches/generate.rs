//! Serializer benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scenegen_codegen::{GenerationContext, GenerationOptions, SerializerRegistry};
use scenegen_ir::IrNode;
use serde_json::{json, Value};

fn card(i: usize) -> Value {
    json!({
        "id": format!("card-{}", i),
        "name": "Product Card",
        "type": "FRAME",
        "width": 280,
        "height": 360,
        "layoutMode": "VERTICAL",
        "itemSpacing": 12,
        "paddingTop": 16,
        "paddingRight": 16,
        "paddingBottom": 16,
        "paddingLeft": 16,
        "cornerRadius": 12,
        "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
        "effects": [{
            "type": "DROP_SHADOW",
            "color": { "r": 0, "g": 0, "b": 0, "a": 0.1 },
            "offset": { "x": 0, "y": 2 },
            "radius": 6
        }],
        "children": [
            {
                "id": format!("image-{}", i),
                "name": "Photo",
                "type": "RECTANGLE",
                "width": 248,
                "height": 180,
                "fills": [{ "type": "IMAGE", "imageHash": "photo", "scaleMode": "FILL" }]
            },
            {
                "id": format!("title-{}", i),
                "name": "Title",
                "type": "TEXT",
                "characters": "Ergonomic Chair",
                "fontSize": 20,
                "fontWeight": 600
            },
            {
                "id": format!("button-{}", i),
                "name": "Buy Button",
                "type": "FRAME",
                "width": 248,
                "height": 40,
                "layoutMode": "HORIZONTAL",
                "primaryAxisAlignItems": "CENTER",
                "children": [{
                    "id": format!("label-{}", i),
                    "name": "Label",
                    "type": "TEXT",
                    "characters": "Add to cart",
                    "fontSize": 14
                }]
            }
        ]
    })
}

fn catalog_page() -> IrNode {
    let cards: Vec<Value> = (0..48).map(card).collect();
    scenegen_normalize::normalize(&json!({
        "id": "0:1",
        "name": "Catalog",
        "type": "FRAME",
        "width": 1280,
        "height": 2400,
        "layoutMode": "HORIZONTAL",
        "layoutWrap": "WRAP",
        "itemSpacing": 24,
        "children": cards
    }))
}

fn generate_all(c: &mut Criterion) {
    let registry = SerializerRegistry::with_defaults();
    let ir = catalog_page();
    let ctx = GenerationContext::new(GenerationOptions::default());

    let mut group = c.benchmark_group("generate");
    for id in registry.ids() {
        group.bench_function(id, |b| {
            b.iter(|| registry.generate(black_box(id), black_box(&ir), &ctx))
        });
    }
    group.finish();
}

fn normalize_page(c: &mut Criterion) {
    let cards: Vec<Value> = (0..48).map(card).collect();
    let input = json!({ "id": "0:1", "name": "Catalog", "type": "FRAME", "children": cards });
    c.bench_function("normalize", |b| {
        b.iter(|| scenegen_normalize::normalize(black_box(&input)))
    });
}

criterion_group!(benches, normalize_page, generate_all);
criterion_main!(benches);
