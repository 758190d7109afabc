use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wayfinder_core::loading::LocationRecord;
use wayfinder_core::{build_location_graph, compute_route};

const FLOORS: usize = 8;
const ROOMS_PER_FLOOR: usize = 40;

fn room_id(floor: usize, room: usize) -> String {
    format!("{floor}F-{room:03}")
}

/// Corridor of rooms on every floor, linked by stairs at both ends
fn synthetic_building() -> Vec<LocationRecord> {
    let mut records = Vec::with_capacity(FLOORS * ROOMS_PER_FLOOR);
    for floor in 1..=FLOORS {
        for room in 0..ROOMS_PER_FLOOR {
            let mut record = LocationRecord::new(room_id(floor, room));
            record.floor = i32::try_from(floor).ok();
            #[allow(clippy::cast_precision_loss)]
            let step = 3.0 + (room % 5) as f64;
            if room + 1 < ROOMS_PER_FLOOR {
                record = record.connect(room_id(floor, room + 1), step);
            }
            if room > 0 {
                record = record.connect(room_id(floor, room - 1), step);
            }
            if room == 0 || room + 1 == ROOMS_PER_FLOOR {
                if floor < FLOORS {
                    record = record.connect(room_id(floor + 1, room), 9.0);
                }
                if floor > 1 {
                    record = record.connect(room_id(floor - 1, room), 9.0);
                }
            }
            records.push(record);
        }
    }
    records
}

fn bench_routing(c: &mut Criterion) {
    let records = synthetic_building();

    c.bench_function("build_location_graph", |b| {
        b.iter(|| build_location_graph(black_box(&records)));
    });

    let graph = build_location_graph(&records);
    let start = room_id(1, ROOMS_PER_FLOOR / 2);
    let goal = room_id(FLOORS, ROOMS_PER_FLOOR / 3);

    c.bench_function("compute_route_across_floors", |b| {
        b.iter(|| compute_route(black_box(&graph), black_box(&start), black_box(&goal)));
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
