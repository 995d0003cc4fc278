use criterion::{criterion_group, criterion_main};
use geo_types::{Geometry, LineString, Point};
use geovec_geometry::wkt_factory::write_geometry;
use wkt::TryFromWkt;

fn generate_wkt_linestring(num_points: usize) -> String {
    let mut points = Vec::new();
    for i in 0..num_points {
        points.push(Point::new(i as f64, i as f64 / 3.0));
    }
    let linestring = Geometry::LineString(LineString::from(points));
    let mut wkt = String::new();
    write_geometry(&mut wkt, &linestring, None).unwrap();
    wkt
}

fn bench_parse(c: &mut criterion::Criterion) {
    for num_points in [4, 10, 100, 500, 1000] {
        let wkt_text = generate_wkt_linestring(num_points);

        c.bench_function(
            &format!("parse linestring containing {num_points} points using geos wkt reader"),
            |b| {
                b.iter(|| {
                    let g = geos::Geometry::new_from_wkt(&wkt_text).unwrap();
                    criterion::black_box(g);
                });
            },
        );

        c.bench_function(
            &format!("parse linestring containing {num_points} points using the wkt crate"),
            |b| {
                b.iter(|| {
                    let g: Geometry<f64> = Geometry::try_from_wkt_str(&wkt_text).unwrap();
                    criterion::black_box(g);
                });
            },
        );
    }
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
