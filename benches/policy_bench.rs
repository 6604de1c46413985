use cookiepolicy::cookies::policy::{CookiePolicy, CookiePolicyMode, StaticCookiePolicy};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

fn bench_policy_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cookie_policy");

    let page = Url::parse("https://www.example.com/").unwrap();
    let targets: Vec<Url> = [
        "https://static.example.com/app.js",
        "https://ads.tracker.net/pixel.gif",
        "https://www.bbc.co.uk/news",
        "http://192.168.0.1/",
    ]
    .iter()
    .map(|s| Url::parse(s).unwrap())
    .collect();

    for mode in CookiePolicyMode::ALL {
        let policy = StaticCookiePolicy::with_mode(mode);
        group.bench_function(format!("get_and_set_{}", mode), |b| {
            b.iter(|| {
                for target in &targets {
                    black_box(policy.can_get_cookies(target, Some(&page)));
                    black_box(policy.can_set_cookie(target, Some(&page), "id=1"));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policy_decisions);
criterion_main!(benches);
