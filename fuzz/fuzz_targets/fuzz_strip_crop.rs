//! Fuzz target for strip cropping, padding and division.

#![no_main]

use arbitrary::Arbitrary;
use feathers::{Segment, Strip, Style};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    parts: Vec<String>,
    start: u8,
    end: u8,
    width: u8,
    cuts: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let strip = Strip::new(
        input
            .parts
            .iter()
            .map(|text| Segment::new(text.as_str(), Style::NONE))
            .collect(),
    );

    let (start, end) = (usize::from(input.start), usize::from(input.end));
    let cropped = strip.crop(start, end);
    let expected = end.min(strip.cell_length()).saturating_sub(start);
    assert_eq!(cropped.cell_length(), expected);

    let width = usize::from(input.width);
    assert_eq!(strip.adjust_cell_length(width, Style::NONE).cell_length(), width);

    let mut cuts: Vec<usize> = input.cuts.iter().copied().map(usize::from).collect();
    cuts.sort_unstable();
    assert_eq!(strip.divide(&cuts).len(), cuts.len());
});
