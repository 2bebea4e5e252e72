#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};

use whatwg_url::Url;

fn short(bench: &mut Bencher) {
    let url = "https://example.com/bench";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn long(bench: &mut Bencher) {
    let url = "https://example.com/parkbench?tre=es&st=uff";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn fragment(bench: &mut Bencher) {
    let url = "https://example.com/parkbench?tre=es&st=uff#fragment";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn plain(bench: &mut Bencher) {
    let url = "https://example.com/";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn port(bench: &mut Bencher) {
    let url = "https://example.com:8080";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn relative(bench: &mut Bencher) {
    let base = Url::parse("https://example.com/a/b/c").unwrap();

    bench.bytes = "../d?x=1".len() as u64;
    bench.iter(|| base.join(black_box("../d?x=1")).unwrap());
}

fn ipv4(bench: &mut Bencher) {
    let url = "https://0x7f.0.0.1/";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn ipv6(bench: &mut Bencher) {
    let url = "https://[2001:db8:0:0:1:0:0:1]/";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn unicode_mixed(bench: &mut Bencher) {
    let url = "https://مثال.example/";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn punycode_mixed(bench: &mut Bencher) {
    let url = "https://xn--mgbh0fb.example/";

    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn search_params(bench: &mut Bencher) {
    let url = Url::parse("https://example.com/?a=1&b=2&c=3&d=4").unwrap();

    bench.iter(|| {
        let mut url = url.clone();
        url.search_params_mut().append(black_box("e"), "5");
        url
    });
}

benchmark_group!(
    benches,
    short,
    long,
    fragment,
    plain,
    port,
    relative,
    ipv4,
    ipv6,
    unicode_mixed,
    punycode_mixed,
    search_params
);
benchmark_main!(benches);
