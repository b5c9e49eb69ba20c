use std::hint::black_box;

use bitbyte::{BitNumbering, BitWriter, Lsb0, Msb0};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const FIELDS: usize = 64 * 1024;

fn write_fields<O: BitNumbering>(nbits: u32) -> Vec<u8> {
    let mut writer = BitWriter::<O>::with_capacity(FIELDS * nbits as usize / 8 + 1);
    for i in 0..FIELDS as u64 {
        // Cannot fail, widths are in range.
        let _ = writer.write_unsigned_number(i, nbits);
    }
    writer.align();

    writer.into_inner()
}

fn bit_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_writer");
    group.throughput(Throughput::Elements(FIELDS as u64));

    for nbits in [1, 13, 64] {
        group.bench_function(format!("write_unsigned_number({nbits}) (LSB 0)"), |b| {
            b.iter(|| black_box(write_fields::<Lsb0>(black_box(nbits))))
        });

        group.bench_function(format!("write_unsigned_number({nbits}) (MSB 0)"), |b| {
            b.iter(|| black_box(write_fields::<Msb0>(black_box(nbits))))
        });
    }

    group.bench_function("append", |b| {
        b.iter(|| {
            let mut writer = BitWriter::<Lsb0>::with_capacity(FIELDS);
            for i in 0..FIELDS {
                let _ = writer.append(i as u8);
            }

            black_box(writer.into_inner())
        })
    });

    group.finish();
}

criterion_group!(benches, bit_writer);
criterion_main!(benches);
