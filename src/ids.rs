//! Joint identifier allocation
//!
//! Joints are named with stable, human-readable ids in generation order:
//! 'A', 'B', ... 'Z', then 'AA', 'AB', ... (bijective base-26, the same
//! scheme spreadsheets use for columns). The mapping is a pure function of
//! the index, so two generator runs with identical parameters always hand
//! out identical ids.

/// Number of letters in the single-character id space
const ALPHABET: usize = 26;

/// Return the joint id for a zero-based allocation index.
///
/// # Examples
/// ```
/// use truss_scene::ids::joint_id;
///
/// assert_eq!(joint_id(0), "A");
/// assert_eq!(joint_id(25), "Z");
/// assert_eq!(joint_id(26), "AA");
/// ```
pub fn joint_id(index: usize) -> String {
    let mut remainder = index;
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (remainder % ALPHABET) as u8);
        remainder /= ALPHABET;
        if remainder == 0 {
            break;
        }
        // Bijective numeration: there is no zero digit, so borrow one from
        // the next place before continuing.
        remainder -= 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_ids() {
        assert_eq!(joint_id(0), "A");
        assert_eq!(joint_id(1), "B");
        assert_eq!(joint_id(10), "K");
        assert_eq!(joint_id(25), "Z");
    }

    #[test]
    fn test_multi_letter_ids() {
        assert_eq!(joint_id(26), "AA");
        assert_eq!(joint_id(27), "AB");
        assert_eq!(joint_id(51), "AZ");
        assert_eq!(joint_id(52), "BA");
        assert_eq!(joint_id(701), "ZZ");
        assert_eq!(joint_id(702), "AAA");
    }

    #[test]
    fn test_ids_are_unique_over_a_large_range() {
        let mut seen = std::collections::HashSet::new();
        for index in 0..2000 {
            assert!(seen.insert(joint_id(index)));
        }
    }
}
