use criterion::{black_box, criterion_group, criterion_main, Criterion};
use picokey_phy::util::hex::hex_to_bytes;
use picokey_phy::{decode, encode, LedDriver, PhyCurves, PhyData, PhyOptions};

fn sample() -> PhyData {
    let mut phy = PhyData::new();
    phy.set_vid_pid(0x20a0, 0x42b1)
        .set_led(Some(25), Some(128), Some(LedDriver::Ws2812))
        .set_option(PhyOptions::DIMMABLE, true)
        .set_presence_timeout(15)
        .set_usb_product("PicoKey")
        .set_curve(PhyCurves::SECP256K1, true);
    phy
}

fn benchmark_decode(c: &mut Criterion) {
    let full = encode(&sample());
    // Last record header promises a byte that is missing
    let truncated = hex_to_bytes("000420a042b1040119050180060200020801");

    c.bench_function("decode_full", |b| {
        b.iter(|| black_box(decode(black_box(&full))))
    });
    c.bench_function("decode_truncated", |b| {
        b.iter(|| black_box(decode(black_box(&truncated))))
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let phy = sample();

    c.bench_function("encode", |b| b.iter(|| black_box(encode(black_box(&phy)))));
}

criterion_group!(benches, benchmark_decode, benchmark_encode);
criterion_main!(benches);
