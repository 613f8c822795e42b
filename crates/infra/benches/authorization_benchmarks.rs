use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, Utc};

use keygate_auth::{
    AuthorizationGate, Permission, Role, RolePermissionRegistry, TokenCodec,
};

const SECRET: &[u8] = b"benchmark-secret";

fn bench_token_issue(c: &mut Criterion) {
    let codec = TokenCodec::new(SECRET);
    let now = Utc::now();

    let mut group = c.benchmark_group("token_issue");
    group.throughput(Throughput::Elements(1));
    group.bench_function("hmac_sha256", |b| {
        b.iter(|| {
            codec
                .issue(
                    black_box("alice"),
                    Role::new("admin"),
                    now,
                    Duration::seconds(60),
                )
                .unwrap()
        })
    });
    group.finish();
}

fn bench_token_verify(c: &mut Criterion) {
    let codec = TokenCodec::new(SECRET);
    let now = Utc::now();
    let token = codec
        .issue("alice", Role::new("admin"), now, Duration::seconds(3600))
        .unwrap();

    let mut group = c.benchmark_group("token_verify");
    group.throughput(Throughput::Elements(1));
    group.bench_function("valid", |b| {
        b.iter(|| codec.verify(black_box(&token), now).unwrap())
    });
    group.bench_function("bad_signature", |b| {
        let other = TokenCodec::new(b"not-the-benchmark-secret".to_vec());
        b.iter(|| other.verify(black_box(&token), now).unwrap_err())
    });
    group.finish();
}

fn bench_authorize(c: &mut Criterion) {
    let gate = AuthorizationGate::new(
        TokenCodec::new(SECRET),
        RolePermissionRegistry::with_defaults(),
    );
    let now = Utc::now();
    let token = TokenCodec::new(SECRET)
        .issue("alice", Role::new("admin"), now, Duration::seconds(3600))
        .unwrap();

    let mut group = c.benchmark_group("authorize");
    group.throughput(Throughput::Elements(1));
    group.bench_function("allowed", |b| {
        b.iter(|| gate.authorize(black_box(&token), &Permission::DELETE, now))
    });
    group.bench_function("malformed_token", |b| {
        b.iter(|| gate.authorize(black_box("not-a-token"), &Permission::DELETE, now))
    });
    group.finish();
}

criterion_group!(benches, bench_token_issue, bench_token_verify, bench_authorize);
criterion_main!(benches);
