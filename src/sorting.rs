//! Stable sort of a symbol list by an external key array.
//!
//! Both Huffman builders need to sort `u16` symbol indices by some external
//! per-symbol key (counts, then code lengths) while keeping ties in
//! increasing symbol order — the canonical-code construction depends on
//! that stability. The reference implementation instantiates this twice via
//! C macros, once for `u8` keys and once for `u32` keys; here it is one
//! generic function.

use crate::config::SORT_INSERTION_LIMIT;

/// Stably sorts `syms` in place by `keys[syms[i]]`, ascending.
///
/// `scratch` must be at least `syms.len()` long; it is reused as merge-sort
/// working space so callers can avoid repeated allocation across builder
/// iterations.
pub fn stable_sort_by_key<K: Ord + Copy>(syms: &mut [u16], keys: &[K], scratch: &mut [u16]) {
    let len = syms.len();
    if len < SORT_INSERTION_LIMIT {
        insertion_sort(syms, keys);
    } else {
        merge_sort(syms, scratch, keys);
    }
}

fn insertion_sort<K: Ord + Copy>(syms: &mut [u16], keys: &[K]) {
    for i in 1..syms.len() {
        let x = syms[i];
        let cond = keys[x as usize];
        let mut j = i;
        while j > 0 && keys[syms[j - 1] as usize] > cond {
            syms[j] = syms[j - 1];
            j -= 1;
        }
        syms[j] = x;
    }
}

fn merge_sort<K: Ord + Copy>(syms: &mut [u16], temp: &mut [u16], keys: &[K]) {
    let len = syms.len();
    if len < SORT_INSERTION_LIMIT {
        insertion_sort(syms, keys);
        return;
    }
    let m = len / 2;
    merge_sort(&mut syms[..m], &mut temp[..m], keys);
    merge_sort(&mut syms[m..], &mut temp[m..], keys);

    temp[..len].copy_from_slice(&syms[..len]);
    let (mut i, mut j, mut k) = (0usize, 0usize, m);
    while j < m && k < len {
        if keys[temp[k] as usize] < keys[temp[j] as usize] {
            syms[i] = temp[k];
            k += 1;
        } else {
            syms[i] = temp[j];
            j += 1;
        }
        i += 1;
    }
    if j < m {
        syms[i..i + (m - j)].copy_from_slice(&temp[j..m]);
    } else if k < len {
        syms[i..i + (len - k)].copy_from_slice(&temp[k..len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_slice_by_key() {
        let mut syms: Vec<u16> = vec![0, 1, 2, 3, 4];
        let keys = [5u32, 3, 3, 1, 4];
        let mut scratch = vec![0u16; syms.len()];
        stable_sort_by_key(&mut syms, &keys, &mut scratch);
        assert_eq!(syms, vec![3, 1, 2, 4, 0]);
    }

    #[test]
    fn ties_keep_increasing_symbol_order() {
        let mut syms: Vec<u16> = (0..10).collect();
        let keys = [1u8; 10];
        let mut scratch = vec![0u16; syms.len()];
        stable_sort_by_key(&mut syms, &keys, &mut scratch);
        assert_eq!(syms, (0..10).collect::<Vec<u16>>());
    }

    #[test]
    fn sorts_above_insertion_threshold_via_merge_path() {
        let len = SORT_INSERTION_LIMIT + 37;
        let mut syms: Vec<u16> = (0..len as u16).collect();
        // Reverse keys so the result exercises the actual merge recursion.
        let keys: Vec<u32> = (0..len as u32).rev().collect();
        let mut scratch = vec![0u16; syms.len()];
        stable_sort_by_key(&mut syms, &keys, &mut scratch);
        let sorted_keys: Vec<u32> = syms.iter().map(|&s| keys[s as usize]).collect();
        let mut expected = sorted_keys.clone();
        expected.sort_unstable();
        assert_eq!(sorted_keys, expected);
    }
}
