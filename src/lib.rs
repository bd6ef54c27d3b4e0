#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[macro_use]
extern crate cfg_if;

mod common;
mod doubling;
mod radix;
mod skew;
mod types;

pub use crate::common::saca_tiny;
pub use crate::doubling::doubling;
pub use crate::skew::skew;
pub use crate::types::{AsIndex, SacaChar, SacaIndex};

/// The suffix sorting algorithms on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Naive,
    Doubling,
    Skew,
}

/// Map a byte string into the integer form the kernels sort: every byte
/// shifted up by one, with the 0 sentinel appended.
pub fn sentinel_string(text: &[u8]) -> Vec<u32> {
    let mut s = Vec::with_capacity(text.len() + 1);
    s.extend(text.iter().map(|&b| b as u32 + 1));
    s.push(0);
    s
}

/// Construct the suffix array of `text` (sentinel position included) with
/// the requested algorithm.
pub fn suffix_array(text: &[u8], algorithm: Algorithm) -> Vec<u32> {
    let s = sentinel_string(text);
    let mut suf = vec![0u32; s.len()];
    match algorithm {
        Algorithm::Naive => saca_tiny(&s[..], &mut suf[..]),
        Algorithm::Doubling => doubling(&s[..], &mut suf[..]),
        Algorithm::Skew => skew(&s[..], &mut suf[..]),
    }
    suf
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    const ALGORITHMS: &[Algorithm] = &[Algorithm::Naive, Algorithm::Doubling, Algorithm::Skew];

    #[test]
    fn tablecheck_all_algorithms() {
        let texts: &[&[u8]] = &[
            b"",
            b"a",
            b"aa",
            b"ba",
            b"banana",
            b"mississippi",
            b"abracadabra",
        ];
        let expected: &[&[u32]] = &[
            &[0],
            &[1, 0],
            &[2, 1, 0],
            &[2, 1, 0],
            &[6, 5, 3, 1, 0, 4, 2],
            &[11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2],
            &[11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2],
        ];

        for (&text, &expect) in texts.iter().zip(expected.iter()) {
            for &algorithm in ALGORITHMS {
                assert_eq!(suffix_array(text, algorithm), expect);
            }
        }
    }

    #[test]
    fn sentinel_suffix_sorts_first() {
        let texts: &[&[u8]] = &[b"zzz", b"abc", b"", b"\x00\x00"];
        for &text in texts.iter() {
            for &algorithm in ALGORITHMS {
                let suf = suffix_array(text, algorithm);
                assert_eq!(suf[0].as_index(), text.len());
            }
        }
    }

    #[quickcheck]
    fn quickcheck_kernels_agree(text: Vec<u8>) -> bool {
        let naive = suffix_array(&text[..], Algorithm::Naive);
        naive == suffix_array(&text[..], Algorithm::Doubling)
            && naive == suffix_array(&text[..], Algorithm::Skew)
    }

    #[quickcheck]
    fn quickcheck_sorted_permutation(text: Vec<u8>) -> bool {
        let s = sentinel_string(&text[..]);
        ALGORITHMS.iter().all(|&algorithm| {
            let suf = suffix_array(&text[..], algorithm);
            is_permutation(&suf[..]) && is_suffix_ordered(&s[..], &suf[..])
        })
    }

    fn is_permutation(suf: &[u32]) -> bool {
        let mut seen = vec![false; suf.len()];
        for &i in suf {
            if i.as_index() >= seen.len() || seen[i.as_index()] {
                return false;
            }
            seen[i.as_index()] = true;
        }
        true
    }

    fn is_suffix_ordered(s: &[u32], suf: &[u32]) -> bool {
        suf.windows(2)
            .all(|w| s[w[0].as_index()..] < s[w[1].as_index()..])
    }
}
