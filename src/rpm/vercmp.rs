//! RPM version comparison
//!
//! Port of the segment-wise comparison rpm uses for versions and releases:
//! strings are split into runs of digits and runs of letters, everything else
//! is a separator. `~` sorts before anything (pre-releases), `^` sorts after
//! the base version but before any further segment (post-release snapshots).

use std::cmp::Ordering;

/// Compare two version (or release) strings the way rpm does
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
  if a == b {
    return Ordering::Equal;
  }

  let one = a.as_bytes();
  let two = b.as_bytes();
  let (mut i, mut j) = (0, 0);

  while i < one.len() || j < two.len() {
    while i < one.len() && !is_segment_byte(one[i]) {
      i += 1;
    }
    while j < two.len() && !is_segment_byte(two[j]) {
      j += 1;
    }

    let c1 = one.get(i).copied();
    let c2 = two.get(j).copied();

    // tilde sorts before everything else, including the end of the string
    if c1 == Some(b'~') || c2 == Some(b'~') {
      if c1 != Some(b'~') {
        return Ordering::Greater;
      }
      if c2 != Some(b'~') {
        return Ordering::Less;
      }
      i += 1;
      j += 1;
      continue;
    }

    // caret sorts after the end of the string but before any other segment
    if c1 == Some(b'^') || c2 == Some(b'^') {
      if c1.is_none() {
        return Ordering::Less;
      }
      if c2.is_none() {
        return Ordering::Greater;
      }
      if c1 != Some(b'^') {
        return Ordering::Greater;
      }
      if c2 != Some(b'^') {
        return Ordering::Less;
      }
      i += 1;
      j += 1;
      continue;
    }

    let (Some(first), Some(_)) = (c1, c2) else {
      break;
    };

    let numeric = first.is_ascii_digit();
    let in_segment = |c: u8| if numeric { c.is_ascii_digit() } else { c.is_ascii_alphabetic() };

    let end1 = i + one[i..].iter().take_while(|&&c| in_segment(c)).count();
    let end2 = j + two[j..].iter().take_while(|&&c| in_segment(c)).count();

    // segments of different types: numeric is newer than alpha
    if end2 == j {
      return if numeric { Ordering::Greater } else { Ordering::Less };
    }

    let mut seg1 = &one[i..end1];
    let mut seg2 = &two[j..end2];

    if numeric {
      seg1 = trim_leading_zeros(seg1);
      seg2 = trim_leading_zeros(seg2);
      match seg1.len().cmp(&seg2.len()) {
        Ordering::Equal => {}
        longer => return longer,
      }
    }

    match seg1.cmp(seg2) {
      Ordering::Equal => {}
      other => return other,
    }

    i = end1;
    j = end2;
  }

  match (i >= one.len(), j >= two.len()) {
    (true, true) => Ordering::Equal,
    (true, false) => Ordering::Less,
    _ => Ordering::Greater,
  }
}

fn is_segment_byte(c: u8) -> bool {
  c.is_ascii_alphanumeric() || c == b'~' || c == b'^'
}

fn trim_leading_zeros(segment: &[u8]) -> &[u8] {
  let zeros = segment.iter().take_while(|&&c| c == b'0').count();
  &segment[zeros..]
}

/// Compare optional values: a missing value sorts before a present one
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
  match (a, b) {
    (None, None) => Ordering::Equal,
    (Some(_), None) => Ordering::Greater,
    (None, Some(_)) => Ordering::Less,
    (Some(a), Some(b)) => rpmvercmp(a, b),
  }
}

/// Compare `(epoch, version, release)` labels: epoch first, then version, then release
pub fn label_compare(a: (u64, &str, Option<&str>), b: (u64, &str, Option<&str>)) -> Ordering {
  a.0
    .cmp(&b.0)
    .then_with(|| rpmvercmp(a.1, b.1))
    .then_with(|| compare_values(a.2, b.2))
}
