//! Fuzz target for random cache mutation sequences.
//!
//! Checks that the line index always matches the virtual height and that
//! viewport reads stay exactly as wide as requested.

#![no_main]

use arbitrary::Arbitrary;
use feathers::{ContentItem, ItemId, RenderablesCache};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Add {
        text: String,
        expand: bool,
        shrink: bool,
        wrap: bool,
    },
    Remove(u8),
    Width(u8),
    Refresh,
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut cache = RenderablesCache::new();
    let mut ids: Vec<ItemId> = Vec::new();

    for op in ops.into_iter().take(64) {
        match op {
            Op::Add {
                text,
                expand,
                shrink,
                wrap,
            } => {
                let item = ContentItem::new(text)
                    .expand(expand)
                    .shrink(shrink)
                    .wrap(wrap);
                ids.push(cache.add(item));
            }
            Op::Remove(pick) => {
                if !ids.is_empty() {
                    let id = ids.remove(usize::from(pick) % ids.len());
                    assert!(cache.remove(id).is_ok());
                }
            }
            Op::Width(width) => cache.set_content_width(usize::from(width)),
            Op::Refresh => cache.refresh(),
            Op::Clear => {
                cache.clear();
                ids.clear();
            }
        }

        assert_eq!(cache.item_count(), ids.len());
        assert_eq!(cache.virtual_size().height, cache.len());
        if let Some(last) = cache.len().checked_sub(1) {
            assert_eq!(cache.render_line(last, 3, 17).cell_length(), 17);
        }
    }
});
