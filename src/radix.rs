use std::collections::BTreeMap;
use std::mem;

use super::types::*;

/// Stable LSD radix sort of fixed-width integer tuples, flattened row-major
/// into `tuples`.
///
/// Writes the sorted order of tuple indices into `ord`; equal tuples keep
/// their index order. `tmp` must match `ord` in length and `buckets` must
/// have one slot past the largest column value.
pub fn radix_sort(tuples: &[u32], width: usize, ord: &mut [u32], tmp: &mut [u32], buckets: &mut [u32]) {
    let m = ord.len();
    debug_assert!(tuples.len() == m * width);
    debug_assert!(tmp.len() == m);

    for i in 0..m {
        ord[i] = u32::from_index(i);
    }
    if m == 0 || width == 0 {
        return;
    }

    let mut src = &mut ord[..];
    let mut dst = &mut tmp[..];
    let mut flipped = false;
    for col in (0..width).rev() {
        // size the bucket table by the widest key in this column.
        let mut max = 0;
        for e in 0..m {
            max = Ord::max(max, tuples[e * width + col].as_index());
        }
        let buckets = &mut buckets[..max + 1];

        buckets.iter_mut().for_each(|b| *b = 0);
        for e in 0..m {
            buckets[tuples[e * width + col].as_index()] += 1;
        }
        buckets.iter_mut().fold(0, |sum, b| {
            let next = sum + *b;
            *b = sum;
            next
        });

        // stable scatter into the bucket slots.
        for i in 0..m {
            let b = tuples[src[i].as_index() * width + col].as_index();
            dst[buckets[b].as_index()] = src[i];
            buckets[b] += 1;
        }
        mem::swap(&mut src, &mut dst);
        flipped = !flipped;
    }
    if flipped {
        dst.copy_from_slice(src);
    }
}

/// Group-start ranks under a sorted order: `rank[ord[i]]` keeps its value
/// while the tuples stay equal and jumps to `i` on every new group, so each
/// rank is also the index where its group begins.
pub fn rank_sparse(tuples: &[u32], width: usize, ord: &[u32], rank: &mut [u32]) {
    if ord.is_empty() {
        return;
    }
    let mut r = 0;
    rank[ord[0].as_index()] = 0;
    for i in 1..ord.len() {
        if row(tuples, width, ord[i]) != row(tuples, width, ord[i - 1]) {
            r = u32::from_index(i);
        }
        rank[ord[i].as_index()] = r;
    }
}

/// Consecutive ranks under a sorted order; returns the number of distinct
/// tuples, so the ranks form a dense alphabet `[0, k)`.
pub fn rank_dense(tuples: &[u32], width: usize, ord: &[u32], rank: &mut [u32]) -> usize {
    if ord.is_empty() {
        return 0;
    }
    let mut r = 0u32;
    rank[ord[0].as_index()] = 0;
    for i in 1..ord.len() {
        if row(tuples, width, ord[i]) != row(tuples, width, ord[i - 1]) {
            r += 1;
        }
        rank[ord[i].as_index()] = r;
    }
    r.as_index() + 1
}

#[inline(always)]
fn row(tuples: &[u32], width: usize, e: u32) -> &[u32] {
    let e = e.as_index();
    &tuples[e * width..(e + 1) * width]
}

/// Stable bucket sort of positions by symbol, for alphabets only known by
/// the values that actually occur.
pub fn char_ord(text: &[u32], ord: &mut [u32]) {
    let mut ptr = BTreeMap::new();
    for &c in text {
        *ptr.entry(c).or_insert(0u32) += 1;
    }

    let mut sum = 0;
    for p in ptr.values_mut() {
        let cnt = *p;
        *p = sum;
        sum += cnt;
    }

    for (i, &c) in text.iter().enumerate() {
        let p = ptr.get_mut(&c).unwrap();
        ord[p.as_index()] = u32::from_index(i);
        *p += 1;
    }
}

/// Dense rank of every symbol into `[0, k)`; returns the alphabet size `k`.
pub fn char_rank(text: &[u32], rank: &mut [u32]) -> usize {
    let mut map = BTreeMap::new();
    for &c in text {
        map.insert(c, 0u32);
    }

    let mut k = 0u32;
    for r in map.values_mut() {
        *r = k;
        k += 1;
    }

    for (i, &c) in text.iter().enumerate() {
        rank[i] = map[&c];
    }
    k.as_index()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort(tuples: &[u32], width: usize, m: usize) -> Vec<u32> {
        let mut ord = vec![0u32; m];
        let mut tmp = vec![0u32; m];
        let mut buckets = vec![0u32; 256];
        radix_sort(tuples, width, &mut ord[..], &mut tmp[..], &mut buckets[..]);
        ord
    }

    #[test]
    fn radix_sort_pairs() {
        // (3,1) (1,2) (3,0) (1,2) (0,9)
        let tuples = &[3, 1, 1, 2, 3, 0, 1, 2, 0, 9];
        assert_eq!(sort(tuples, 2, 5), vec![4, 1, 3, 2, 0]);
    }

    #[test]
    fn radix_sort_triples() {
        // (2,2,1) (2,1,9) (0,0,0) (2,1,9)
        let tuples = &[2, 2, 1, 2, 1, 9, 0, 0, 0, 2, 1, 9];
        assert_eq!(sort(tuples, 3, 4), vec![2, 1, 3, 0]);
    }

    #[test]
    fn radix_sort_stability() {
        // all keys equal: the original index order must survive.
        let tuples = &[7, 7, 7, 7, 7, 7];
        assert_eq!(sort(tuples, 1, 6), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn radix_sort_empty_and_zero_width() {
        assert_eq!(sort(&[], 3, 0), vec![]);
        // width 0 leaves the identity untouched.
        assert_eq!(sort(&[], 0, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rank_variants() {
        // (5) (5) (9) (0)
        let tuples = &[5, 5, 9, 0];
        let ord = sort(tuples, 1, 4);
        assert_eq!(ord, vec![3, 0, 1, 2]);

        // sparse ranks are group starts, dense ranks are consecutive.
        let mut rank = vec![0u32; 4];
        rank_sparse(tuples, 1, &ord[..], &mut rank[..]);
        assert_eq!(rank, vec![1, 1, 3, 0]);

        let k = rank_dense(tuples, 1, &ord[..], &mut rank[..]);
        assert_eq!(k, 3);
        assert_eq!(rank, vec![1, 1, 2, 0]);
    }

    #[test]
    fn char_ord_and_rank() {
        let text = &[30, 10, 20, 10, 0];
        let mut ord = vec![0u32; text.len()];
        char_ord(text, &mut ord[..]);
        assert_eq!(ord, vec![4, 1, 3, 2, 0]);

        let mut rank = vec![0u32; text.len()];
        let k = char_rank(text, &mut rank[..]);
        assert_eq!(k, 4);
        assert_eq!(rank, vec![3, 1, 2, 1, 0]);
    }
}
