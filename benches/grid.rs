use criterion::{criterion_group, criterion_main, Criterion};
use labyrinth::{
    cells::GridCoordinate,
    generators,
    grid::MazeGrid,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn generated_grid(side: usize) -> MazeGrid {
    let mut g = MazeGrid::create(Width(side), Height(side)).unwrap();
    let _ = generators::recursive_backtracker(&mut g, &mut XorShiftRng::seed_from_u64(1));
    g
}

fn bench_blank_grid_41(c: &mut Criterion) {
    c.bench_function("blank_grid_41", |b| {
        b.iter(|| MazeGrid::create(Width(41), Height(41)).unwrap())
    });
}

fn bench_blank_grid_501(c: &mut Criterion) {
    c.bench_function("blank_grid_501", |b| {
        b.iter(|| MazeGrid::create(Width(501), Height(501)).unwrap())
    });
}

fn bench_index_to_gridcoordinate(c: &mut Criterion) {
    c.bench_function("index_to_gridcoordinate", |b| {
        b.iter(|| GridCoordinate::from_row_major_index(93, Width(41)))
    });
}

fn bench_neighbours_of_interest_corner(c: &mut Criterion) {
    let g = MazeGrid::create(Width(41), Height(41)).unwrap();
    let corner = GridCoordinate::new(1, 1);
    c.bench_function("neighbours_of_interest_corner", move |b| {
        b.iter(|| g.neighbours_of_interest(corner))
    });
}

fn bench_neighbours_of_interest_middle(c: &mut Criterion) {
    let g = MazeGrid::create(Width(41), Height(41)).unwrap();
    let mid = GridCoordinate::new(21, 21);
    c.bench_function("neighbours_of_interest_middle", move |b| {
        b.iter(|| g.neighbours_of_interest(mid))
    });
}

fn bench_links_middle(c: &mut Criterion) {
    let g = generated_grid(41);
    let mid = GridCoordinate::new(21, 21);
    c.bench_function("links_middle", move |b| b.iter(|| g.links(mid)));
}

fn bench_render_41(c: &mut Criterion) {
    let g = generated_grid(41);
    c.bench_function("render_41", move |b| b.iter(|| g.render(None)));
}

criterion_group!(
    benches,
    bench_blank_grid_41,
    bench_blank_grid_501,
    bench_index_to_gridcoordinate,
    bench_neighbours_of_interest_corner,
    bench_neighbours_of_interest_middle,
    bench_links_middle,
    bench_render_41
);
criterion_main!(benches);
