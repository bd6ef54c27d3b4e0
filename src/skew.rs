use super::common::saca_tiny;
use super::radix::{char_rank, radix_sort, rank_dense};
use super::types::*;

/// Sort suffix array by the mod-3 difference-cover recursion, O(n).
///
/// Suffixes at positions i ≡ 0, 1 (mod 3) are ordered through a recursively
/// sorted reduced string; the i ≡ 2 (mod 3) suffixes piggyback on those
/// ranks and the two streams merge in one pass. `text` must end with its
/// unique smallest symbol.
pub fn skew(text: &[u32], suf: &mut [u32]) {
    debug_assert!(text.len() <= suf.len());
    let n = text.len();
    let suf = &mut suf[..n];
    if n == 0 {
        return;
    }

    // compress the alphabet so every symbol is below n and the bucket
    // tables of the recursion stay linear in the level size.
    let mut s = vec![0u32; n];
    char_rank(text, &mut s[..]);

    let mut arena = vec![0u32; arena_len(n)];
    skew_rec(&s[..], suf, &mut arena[..]);
}

/// Scratch requirement of the whole recursion. Mirrors the slice carving in
/// `skew_rec` level by level.
fn arena_len(n: usize) -> usize {
    if n < 3 {
        return 0;
    }
    let n2 = n / 3;
    let n01 = n - n2;
    let triples = n01 + Ord::max(5 * n01 + n + 1, arena_len(n01));
    let pairs = 3 * n2 + n + 1;
    2 * n01 + n2 + Ord::max(triples, pairs)
}

fn skew_rec(s: &[u32], suf: &mut [u32], work: &mut [u32]) {
    let n = s.len();
    if n < 3 {
        saca_tiny(s, suf);
        return;
    }

    let n2 = n / 3;
    let n0 = n2 + (n % 3 > 0) as usize;
    let n1 = n2 + (n % 3 > 1) as usize;
    let n01 = n0 + n1;

    // slices that stay live until the merge; everything past them is
    // transient and gets reused by the recursive call.
    let (rank0, work) = work.split_at_mut(n0);
    let (rank1, work) = work.split_at_mut(n1);
    let (sa01, work) = work.split_at_mut(n01);
    let (ord2, work) = work.split_at_mut(n2);

    // order the sampled suffixes (residues 0 and 1): rank their leading
    // symbol triples, then sort the reduced string recursively.
    {
        let (r01, rest) = work.split_at_mut(n01);
        {
            let (tuples, rest) = rest.split_at_mut(3 * n01);
            let (t_ord, rest) = rest.split_at_mut(n01);
            let (t_tmp, rest) = rest.split_at_mut(n01);
            let (buckets, _) = rest.split_at_mut(n + 1);

            let mut e = 0;
            for m in 0..2 {
                let mut i = m;
                while i < n {
                    tuples[3 * e] = s[i];
                    tuples[3 * e + 1] = fetch(s, i + 1);
                    tuples[3 * e + 2] = fetch(s, i + 2);
                    e += 1;
                    i += 3;
                }
            }
            radix_sort(tuples, 3, t_ord, t_tmp, buckets);
            rank_dense(tuples, 3, t_ord, r01);
        }
        skew_rec(r01, sa01, rest);
    }

    // translate the reduced order back to text positions, recording where
    // every sampled suffix landed.
    for i in 0..n01 {
        let j = sa01[i].as_index();
        if j < n0 {
            rank0[j] = u32::from_index(i);
            sa01[i] = u32::from_index(3 * j);
        } else {
            let j = j - n0;
            rank1[j] = u32::from_index(i);
            sa01[i] = u32::from_index(3 * j + 1);
        }
    }

    // order the residue-2 suffixes by their first symbol and the sample
    // rank of the suffix one position later.
    {
        let (pairs, rest) = work.split_at_mut(2 * n2);
        let (t_tmp, rest) = rest.split_at_mut(n2);
        let (buckets, _) = rest.split_at_mut(n + 1);

        for e in 0..n2 {
            pairs[2 * e] = s[3 * e + 2];
            pairs[2 * e + 1] = fetch(rank0, e + 1);
        }
        radix_sort(pairs, 2, ord2, t_tmp, buckets);
    }

    // merge the two sorted streams; reads past the end act as the sentinel,
    // and the shifted positions always land back in the sampled set.
    let (mut a, mut b, mut out) = (0, 0, 0);
    while a < n01 && b < n2 {
        let p01 = sa01[a].as_index();
        let e2 = ord2[b].as_index();
        let p2 = 3 * e2 + 2;
        let i = p01 / 3;
        let lt = if p01 % 3 == 0 {
            if s[p01] != s[p2] {
                s[p01] < s[p2]
            } else {
                fetch(rank1, i) < fetch(rank0, e2 + 1)
            }
        } else if s[p01] != s[p2] {
            s[p01] < s[p2]
        } else if fetch(s, p01 + 1) != fetch(s, p2 + 1) {
            fetch(s, p01 + 1) < fetch(s, p2 + 1)
        } else {
            fetch(rank0, i + 1) < fetch(rank1, e2 + 1)
        };
        if lt {
            suf[out] = sa01[a];
            a += 1;
        } else {
            suf[out] = u32::from_index(p2);
            b += 1;
        }
        out += 1;
    }
    while a < n01 {
        suf[out] = sa01[a];
        a += 1;
        out += 1;
    }
    while b < n2 {
        suf[out] = u32::from_index(3 * ord2[b].as_index() + 2);
        b += 1;
        out += 1;
    }
}

#[inline(always)]
fn fetch(v: &[u32], i: usize) -> u32 {
    v.get(i).cloned().unwrap_or(0)
}
