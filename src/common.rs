use super::types::*;

/// Naive suffix array construction algorithm that works on any input.
///
/// Sorts the identity permutation with a plain suffix comparator. Quadratic
/// in the worst case; serves as the correctness oracle and as the base case
/// of the recursive kernel.
pub fn saca_tiny<C, I>(text: &[C], suf: &mut [I])
where
    C: SacaChar,
    I: SacaIndex,
{
    debug_assert!(text.len() <= suf.len());
    for i in 0..text.len() {
        suf[i] = I::from_index(i);
    }
    suf[..text.len()].sort_by(|&i, &j| {
        let i = i.as_index();
        let j = j.as_index();
        Ord::cmp(&text[i..], &text[j..])
    });
}

#[cfg(test)]
mod tests {
    use super::saca_tiny;

    #[test]
    fn tablecheck_saca_tiny() {
        let texts: &[&[u32]] = &[
            &[],
            &[0],
            &[1, 0],
            &[2, 1, 0],
            &[1, 1, 0],
            &[2, 1, 4, 1, 1, 4, 1, 3, 1, 0],
        ];
        let expected: &[&[u32]] = &[
            &[],
            &[0],
            &[1, 0],
            &[2, 1, 0],
            &[2, 1, 0],
            &[9, 8, 3, 6, 1, 4, 0, 7, 2, 5],
        ];

        for (&text, &expect) in texts.iter().zip(expected.iter()) {
            let mut suf = vec![0u32; text.len()];
            saca_tiny(text, &mut suf[..]);
            assert_eq!(&suf[..], expect);
        }
    }
}
