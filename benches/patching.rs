// benches/patching.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use index_updater::{
    patch::{apply_all, Patch},
    progress::NullProgress,
    runner::process_sheets,
    specs::authors::Highlighter,
    workbook::Worksheet,
};

const SECTIONS: &[(&str, &str)] = &[
    ("News", "ul"),
    ("Refereed Journal Papers", "ol"),
    ("Refereed Conference Papers", "ol"),
    ("Patent", "ol"),
    ("Award", "ul"),
];

/// A page shaped like a real profile page: filler between anchored lists.
fn synthetic_page() -> String {
    let mut page = String::from("<html>\n<body>\n");
    for (anchor, tag) in SECTIONS {
        for i in 0..50 {
            page.push_str(&format!("    <p>filler paragraph {i}</p>\n"));
        }
        page.push_str(&format!("    <div id=\"{anchor}\"></div>\n    <{tag}>\n"));
        for i in 0..40 {
            page.push_str(&format!("        <li>old entry {i}</li>\n        <br>\n"));
        }
        page.push_str(&format!("    </{tag}>\n"));
    }
    page.push_str("</body>\n</html>\n");
    page
}

fn journal_sheet(rows: usize) -> Worksheet {
    let header: &[&str] = &["authors", "author_order", "title", "journal", "year", "doi", "note"];
    let body: Vec<[String; 7]> = (0..rows)
        .map(|i| [
            "Alice Lee, Yuchen Li, Bob Wu".to_string(),
            "2".to_string(),
            format!("Paper number {i}"),
            "IEEE Transactions on Things".to_string(),
            "2024".to_string(),
            format!("10.1109/T.{i}"),
            if i % 7 == 0 { "Best Paper".to_string() } else { String::new() },
        ])
        .collect();
    let mut grid: Vec<Vec<&str>> = vec![header.to_vec()];
    grid.extend(body.iter().map(|r| r.iter().map(String::as_str).collect()));
    let grid: Vec<&[&str]> = grid.iter().map(Vec::as_slice).collect();
    Worksheet::from_strings("Journal", &grid)
}

fn bench_patching(c: &mut Criterion) {
    let page = synthetic_page();
    let patches: Vec<Patch> = SECTIONS
        .iter()
        .map(|(anchor, tag)| {
            let inner = (0..40)
                .map(|i| format!("<li>new entry {i}</li>\n<br>"))
                .collect::<Vec<_>>()
                .join("\n");
            Patch::list(anchor, tag, inner)
        })
        .collect();

    c.bench_function("apply_all_lists", |b| {
        b.iter(|| {
            let out = apply_all(black_box(&page), black_box(&patches));
            black_box(out.len())
        })
    });

    let sheets = vec![journal_sheet(200)];
    let hl = Highlighter::default();
    c.bench_function("process_journal_sheet", |b| {
        b.iter(|| {
            let (out, summary) = process_sheets(black_box(&sheets), black_box(&page), &hl, &mut NullProgress);
            black_box((out.len(), summary.applied.len()))
        })
    });
}

criterion_group!(benches, bench_patching);
criterion_main!(benches);
