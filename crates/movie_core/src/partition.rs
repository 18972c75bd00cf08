use std::num::NonZeroUsize;

use crate::{Chunk, MovieUrl};

/// Split `urls` into exactly `k` contiguous chunks of `ceil(len / k)` items.
///
/// The remainder is not rebalanced: the last non-empty chunk may be shorter and
/// chunks past the end of the list are empty.
pub fn url_chunks(urls: &[MovieUrl], k: NonZeroUsize) -> Vec<Chunk> {
    let k = k.get();
    let size = urls.len().div_ceil(k);
    (0..k)
        .map(|i| {
            let start = (i * size).min(urls.len());
            let end = ((i + 1) * size).min(urls.len());
            urls[start..end].to_vec()
        })
        .collect()
}
