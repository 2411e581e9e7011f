#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    index: u8,
    depth: u8,
}

fuzz_target!(|input: Input| {
    // Keep runs short: depth 6 carpets are half a million cells.
    let depth = u32::from(input.depth % 8).min(4);
    let index = u32::from(input.index % 5);

    match fracdraw_domain::make_grid(index, depth) {
        Ok(grid) => {
            let def = fracdraw_domain::lookup(index).expect("index accepted by make_grid");
            assert_eq!(Some(grid.side()), def.side_at(depth));
            assert_eq!(Some(grid.drawn_count()), def.drawn_cells_at(depth));
        }
        Err(_) => {
            assert!(!(1..=3).contains(&index) || depth == 0);
        }
    }
});
