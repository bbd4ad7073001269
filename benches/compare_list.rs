#[macro_use]
extern crate criterion;

use std::collections::LinkedList as StdLinkedList;

use criterion::{black_box, Criterion};

use flex_list::{ArrayList, GrowExact, LinkedList};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("arraylist add_last {} values", count), |b| {
            b.iter(|| {
                let mut buf = ArrayList::<usize>::new();
                for value in 0..count {
                    buf.add_last(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("arraylist grow exact add_last {} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = ArrayList::with_grow(1, GrowExact);
                    for value in 0..count {
                        buf.add_last(black_box(value));
                    }
                });
            },
        );

        c.bench_function(
            &format!("arraylist with_capacity({0}) add_last {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = ArrayList::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.add_last(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("linkedlist add_last {} values", count), |b| {
            b.iter(|| {
                let mut buf = LinkedList::<usize>::new();
                for value in 0..count {
                    buf.add_last(black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdlinkedlist push_back {} values", count), |b| {
            b.iter(|| {
                let mut buf = StdLinkedList::<usize>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(&format!("arraylist add_first {} values", count), |b| {
            b.iter(|| {
                let mut buf = ArrayList::<usize>::new();
                for value in 0..count {
                    let _ = buf.add_first(black_box(value));
                }
            });
        });

        c.bench_function(&format!("linkedlist add_first {} values", count), |b| {
            b.iter(|| {
                let mut buf = LinkedList::<usize>::new();
                for value in 0..count {
                    buf.add_first(black_box(value));
                }
            });
        });

        c.bench_function(&format!("arraylist get all of {} values", count), |b| {
            let buf: ArrayList<usize> = (0..count).collect();
            b.iter(|| {
                for index in 0..count {
                    let _ = black_box(buf.get(index));
                }
            });
        });

        if count == SMALL_COUNT {
            c.bench_function(&format!("linkedlist get all of {} values", count), |b| {
                let buf: LinkedList<usize> = (0..count).collect();
                b.iter(|| {
                    for index in 0..count {
                        let _ = black_box(buf.get(index));
                    }
                });
            });

            c.bench_function(&format!("linkedlist get last of {} values", count), |b| {
                let buf: LinkedList<usize> = (0..count).collect();
                b.iter(|| black_box(buf.get(count - 1)));
            });
        }

        c.bench_function(&format!("arraylist reverse {} values", count), |b| {
            let mut buf: ArrayList<usize> = (0..count).collect();
            b.iter(|| buf.reverse());
        });

        c.bench_function(&format!("linkedlist reverse {} values", count), |b| {
            let mut buf: LinkedList<usize> = (0..count).collect();
            b.iter(|| buf.reverse());
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
