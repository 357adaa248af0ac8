use criterion::{Criterion, criterion_group, criterion_main};
use playbook_blocks_engine::{BlockKind, RawBlock, parse_blocks, scan_lesson};

fn generate_lesson(sections: usize) -> String {
    let base = "## Incident\n\nSomething broke.\n\n\
                ```terminal\n$ kubectl get pods \\\n  -n prod\nNAME READY\napi-1 0/1\n# restart it\n$ kubectl rollout restart deploy/api\n```\n\n\
                ```email variant=critical\nFrom: oncall@example.com\nSubject: Outage\n\nAll hands.\n```\n\n\
                ```checklist\n✓ Read the logs\n- Page the owner\n* Write it up\n```\n\n\
                ```pager time=03:12\nHigh error rate\n5xx above 2%\n```\n\n";
    base.repeat(sections)
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let lesson = generate_lesson(100);
    let blocks = scan_lesson(&lesson)
        .iter()
        .filter_map(|segment| segment.block().cloned())
        .collect::<Vec<RawBlock>>();

    group.bench_function("scan_lesson", |b| {
        b.iter(|| std::hint::black_box(scan_lesson(std::hint::black_box(&lesson))));
    });

    group.bench_function("parse_blocks", |b| {
        b.iter(|| std::hint::black_box(parse_blocks(std::hint::black_box(&blocks))));
    });

    let terminal = RawBlock::new(BlockKind::Terminal, "$ echo hi \\\n  there\nhi there\n".repeat(500));
    group.bench_function("terminal_long_session", |b| {
        b.iter(|| std::hint::black_box(parse_blocks(std::slice::from_ref(&terminal))));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
