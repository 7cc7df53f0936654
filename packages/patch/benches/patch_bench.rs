use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tandem_catalog::{lookup, TemplateKind};
use tandem_patch::{patch, Commit};

fn patch_text_edit(c: &mut Criterion) {
    let code = lookup(TemplateKind::Dashboard).code;
    let commit = Commit::new("header.title", "Admin Panel", "Dashboard");

    c.bench_function("patch_text_edit", |b| {
        b.iter(|| patch(black_box(code), black_box(&commit)))
    });
}

fn patch_style_edit(c: &mut Criterion) {
    let code = lookup(TemplateKind::LandingPage).code;
    let commit = Commit::new("hero.primaryButton.style.backgroundColor", "#FF5733", "");

    c.bench_function("patch_style_edit", |b| {
        b.iter(|| patch(black_box(code), black_box(&commit)))
    });
}

fn patch_stacked_style_edits(c: &mut Criterion) {
    let code = lookup(TemplateKind::LandingPage).code;
    let props = ["backgroundColor", "color", "borderRadius"];

    c.bench_function("patch_stacked_style_edits", |b| {
        b.iter(|| {
            let mut patched = code.to_string();
            for prop in props {
                let commit =
                    Commit::new(format!("hero.primaryButton.style.{prop}"), "#3366FF", "");
                patched = patch(black_box(&patched), &commit);
            }
            patched
        })
    });
}

criterion_group!(
    benches,
    patch_text_edit,
    patch_style_edit,
    patch_stacked_style_edits
);
criterion_main!(benches);
