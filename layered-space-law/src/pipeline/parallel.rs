//! Order-preserving fan-out over scoped threads.

use std::panic;
use std::thread;

/// Map `f` over `items` using up to `workers` scoped threads.
///
/// Items are split into contiguous chunks, one per worker, and the results are
/// reassembled in input order. A panic in `f` is resumed on the caller.
pub(crate) fn map_ordered<T, R, F>(items: &[T], workers: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let workers = workers.max(1);
    if workers == 1 || items.len() < 2 {
        return items.iter().map(&f).collect();
    }

    let chunk_size = (items.len() + workers - 1) / workers;
    let f = &f;

    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(f).collect::<Vec<R>>()))
            .collect();

        let mut results = Vec::with_capacity(items.len());
        for handle in handles {
            match handle.join() {
                Ok(chunk) => results.extend(chunk),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        results
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_across_workers() {
        let items: Vec<usize> = (0..37).collect();
        for workers in [1, 2, 3, 8, 64] {
            let doubled = map_ordered(&items, workers, |n| n * 2);
            assert_eq!(doubled, items.iter().map(|n| n * 2).collect::<Vec<_>>());
        }
    }

    #[test]
    fn zero_workers_runs_inline() {
        assert_eq!(map_ordered(&[1, 2, 3], 0, |n| n + 1), vec![2, 3, 4]);
    }

    #[test]
    fn empty_input() {
        let empty: [u8; 0] = [];
        assert!(map_ordered(&empty, 4, |n| *n).is_empty());
    }
}
