use crate::RawAction;
use crate::error::ActionError;

/// n! by repeated multiplication. n here is a player count, so single
/// digits in practice; usize has room to spare.
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// whether every value in 0..len appears exactly once.
pub fn is_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// the x-th permutation of 0..n, counting in factorial-number-system order.
/// x decomposes into Lehmer digits weighted (n-1)!, (n-2)!, .., 0!; digit i
/// then selects the digit-th smallest index still unused, so each digit
/// draws from a pool that shrinks by one. linear pool removal makes this
/// O(n²), which at table sizes is nothing.
pub fn unrank(x: RawAction, n: usize) -> Result<Vec<usize>, ActionError> {
    let order = factorial(n);
    ActionError::bounded("permutation rank", x as isize, 0, order as isize - 1)?;
    let mut pool = (0..n).collect::<Vec<usize>>();
    let mut perm = Vec::with_capacity(n);
    let mut rest = x;
    for i in (0..n).rev() {
        let weight = factorial(i);
        let digit = rest / weight;
        rest %= weight;
        perm.push(pool.remove(digit));
    }
    Ok(perm)
}

/// rank of a permutation of 0..n; exact inverse of unrank. each position
/// contributes (how many unused indices it skips) times the factorial
/// weight of the positions after it.
pub fn rank(perm: &[usize]) -> Result<RawAction, ActionError> {
    let n = perm.len();
    if !is_permutation(perm) {
        return Err(ActionError::InvalidPermutation { n });
    }
    let mut pool = (0..n).collect::<Vec<usize>>();
    let mut x = 0;
    for (i, p) in perm.iter().enumerate() {
        let digit = pool
            .iter()
            .position(|q| q == p)
            .expect("membership checked above");
        x += digit * factorial(n - 1 - i);
        pool.remove(digit);
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrank_zero_is_identity() {
        for n in 1..8 {
            let perm = unrank(0, n).unwrap();
            assert!(perm == (0..n).collect::<Vec<usize>>());
        }
    }

    #[test]
    fn unrank_last_is_reversal() {
        for n in 1..8 {
            let perm = unrank(factorial(n) - 1, n).unwrap();
            assert!(perm == (0..n).rev().collect::<Vec<usize>>());
        }
    }

    #[test]
    fn rank_inverts_unrank() {
        for n in 4..8 {
            for x in 0..factorial(n) {
                let perm = unrank(x, n).unwrap();
                assert!(rank(&perm).unwrap() == x);
            }
        }
    }

    #[test]
    fn unrank_inverts_rank() {
        for n in 1..6 {
            for x in 0..factorial(n) {
                let perm = unrank(x, n).unwrap();
                assert!(unrank(rank(&perm).unwrap(), n).unwrap() == perm);
            }
        }
    }

    #[test]
    fn unrank_exhausts_distinct_permutations() {
        let n = 5;
        let mut unique = std::collections::HashSet::new();
        for x in 0..factorial(n) {
            assert!(unique.insert(unrank(x, n).unwrap()));
        }
        assert!(unique.len() == factorial(n));
    }

    #[test]
    fn unrank_rejects_rank_overflow() {
        for n in 1..8 {
            assert!(unrank(factorial(n), n).is_err());
        }
    }

    #[test]
    fn rank_rejects_duplicates() {
        assert!(rank(&[0, 1, 1, 3]) == Err(ActionError::InvalidPermutation { n: 4 }));
    }

    #[test]
    fn rank_rejects_out_of_alphabet() {
        assert!(rank(&[0, 1, 2, 4]) == Err(ActionError::InvalidPermutation { n: 4 }));
    }

    #[test]
    fn rank_accepts_empty() {
        assert!(rank(&[]).unwrap() == 0);
    }
}
